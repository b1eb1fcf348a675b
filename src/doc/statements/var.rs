/*!
# `VAR <type> <name> <value>`

## Purpose
Declare a variable and give it a starting value.

## Remarks
Declarations are read before the program runs. When execution reaches a
`VAR` line it does nothing. `INT` values must be whole numbers or the
program will not load. Double quotes around a text value are removed.

## Example
```text
VAR INT total 0
VAR STRING title "Monthly Report"
```

*/
