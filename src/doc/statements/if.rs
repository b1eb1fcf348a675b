/*!
# `IF <comparison> <operand> <operand> <label>`

## Purpose
Move execution to the label when the comparison holds.

## Remarks
The comparison is one of `>`, `>=`, `<` or `<=`. Both operands must be
numbers. When the comparison fails execution continues with the next line.
A missing label is only noticed when the jump is taken.

## Example
```text
IF >= score 90 passed
PRINT "try again"
passed: PRINT "well done"
```

*/
