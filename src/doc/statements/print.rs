/*!
# `PRINT [<list of operands>]`

## Purpose
Output information to the terminal.

## Remarks
Operands are separated by spaces. They print with one space between them
followed by a newline. An operand that is not a variable, a quoted string
or a number is a `VARIABLE NOT DEFINED` error and nothing is printed.
A quoted string must end where the operand ends, so `"a"b` is one
undefined operand rather than a string followed by a variable.

## Example
```text
PRINT "Sum is" sum
```

*/
