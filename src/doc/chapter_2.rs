/*!
# Operands

| Operand | As a source | As a destination |
|---------|-------------|------------------|
| `123`, `-1.5` | the number | - |
| `"text"`, `'text'` | the text | - |
| `ACC`, `R0`..`R9` | the register | the register |
| `ADDR` | the memory address | sets the memory address |
| `MEM` | the memory cell at `ADDR` | the memory cell at `ADDR` |
| `PUSH`, `PSH` | - | pushes onto the value stack |
| `POP` | removes the top of the value stack | - |
| `TOP` | the top of the value stack | - |
| `IN` | waits for a value from the console | - |
| `OUT` | - | prints the value |
| `VOID` | - | discards the value |
| `RAND` | a random number from 0 up to 1 | - |

Every register starts as the number zero, and so does every memory cell
until it is written. Memory holds 65536 cells. `ADDR` only accepts
whole numbers that are not negative.

Using an operand on the wrong side fails with `INVALID DATA SOURCE` or
`INVALID DATA DESTINATION`. Reading `POP` or `TOP` from an empty stack
fails with `STACK UNDERFLOW`.

A text literal ends at the first matching quote that is not preceded by
a backslash. The backslash is kept as part of the text. A comment marker
inside a literal still starts a comment.

*/
