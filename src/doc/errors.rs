/*!
# Errors

A runtime error stops the program. BEEP reports the line and the reason.

<pre><code>&nbsp;*** line 4 error detected ***
&nbsp;           4 *** Label DONE is not defined ***
</code></pre>

| Error | Cause |
|-------|-------|
| `VARIABLE NOT DEFINED` | An operand is not a variable, quoted string or number. |
| `LABEL NOT DEFINED` | `GOTO` names a label that does not exist. |
| `TOO FEW OPERANDS` | An operator is missing an operand. |
| `INVALID VALUE TYPE` | A number was expected. |
| `INVALID EXPRESSION` | Unknown operator, or an `IF` that could not be evaluated. |

Running 5000 statements without reaching the end is treated as an infinite
loop. The interpreter prints `Infinite loop most likely encountered` and
exits with status 1.

*/
