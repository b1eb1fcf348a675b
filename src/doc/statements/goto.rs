/*!
# `GOTO <label>`

## Purpose
Immediately and unconditionally move execution to the line with the label.

## Remarks
If `<label>` doesn't exist a `LABEL NOT DEFINED` error will occur.

## Example
```text
GOTO done
PRINT "THIS WILL NOT PRINT"
done: PRINT "THIS WILL PRINT"
```

*/
