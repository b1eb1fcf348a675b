/*!
# `ASSIGN <name> [<operator> <operand> <operand>]`

## Purpose
Store a value in a variable.

## Remarks
Without an operator the single operand is copied. Assigning to a name that
was never declared creates it.

| Operator | Result |
|----------|--------|
| `*` | text of the first operand repeated by the second |
| `+` | value of the variable named first plus the number given second |
| `-` | value of the variable named first minus the number given second |
| `>` | `1` when the first number is greater, otherwise `0` |
| `>=` | `1` when the first number is greater or equal, otherwise `0` |
| `&` | both operands joined into one text |

Any other operator is an `INVALID EXPRESSION`. An operator with fewer
than two operands is `TOO FEW OPERANDS`.

## Example
```text
ASSIGN line * "-" 20
ASSIGN count + count 1
ASSIGN title & "Total: " count
```

*/
