/*!
# Introductory Tutorial for BEEP

Write a program in any text editor and save it, for example as
`hello.beep`.

```text
PRINT "Hello World"
```

Then run it.

<pre><code>&nbsp;$ beep hello.beep
&nbsp;BEEP source code in hello.beep:
&nbsp;1. PRINT "Hello World"
&nbsp;Variables:
&nbsp;    Variable     Type    Value
&nbsp;Labels:
&nbsp;    Label        Statement
&nbsp;execution begins ...
&nbsp;Hello World
&nbsp;execution ends, 1 lines executed
</code></pre>

Before running anything, BEEP shows the numbered source along with the
variables and labels it found. Use `--quiet` to skip that.

Variables are declared with `VAR`, giving a type, a name and a starting
value. `INT` variables hold whole numbers. Any other type name holds text.
Names are not case sensitive; `count`, `Count` and `COUNT` are the same
variable.

```text
VAR INT count 0
VAR STRING name "Ada Lovelace"
```

A word followed by a colon at the start of a line is a label. `GOTO`
and `IF` use labels to move execution somewhere else.

```text
VAR INT n 3
again: PRINT n
ASSIGN n - n 1
IF > n 0 again
PRINT "liftoff"
```

A program that never stops is stopped for you after 5000 statements.

*/
