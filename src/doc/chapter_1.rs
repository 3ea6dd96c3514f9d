/*!
# Instructions

In the tables, `a` and `b` are source operands and `d` is a
destination. Numeric instructions fail with `NOT A NUMBER` when an
operand does not read as a finite number.

## Tests

A test compares its operands. When the comparison is false, the next
line is skipped.

| Instruction | Runs the next line when |
|-------------|-------------------------|
| `TEQ a b`   | a = b |
| `TNE a b`   | a ≠ b |
| `TGT a b`   | a > b |
| `TGE a b`   | a ≥ b |
| `TLT a b`   | a < b |
| `TLE a b`   | a ≤ b |
| `TNUM a`    | a reads as a number |

`TEQS`, `TNES`, `TGTS`, `TGES`, `TLTS` and `TLES` compare the text of
their operands instead, character by character.

## Flow

| Instruction | Effect |
|-------------|--------|
| `JUMP a`, `JMP a` | Continue after label `a`, or at line number `a` counting from zero |
| `JRL a`, `JREL a` | Move `a` lines forward or backward from this line |
| `JSR a`           | Remember this line, then `JUMP a` |
| `RET`, `RSR`      | Continue on the line after the last `JSR` |

Returning when no `JSR` is outstanding fails with `STACK UNDERFLOW`.
Jumping to a label that is not defined fails with `UNDEFINED LABEL`.

## Arithmetic

These write their result to `ACC`.

| Instruction | Result |
|-------------|--------|
| `ADD a b` | a + b |
| `SUB a b` | a − b |
| `MULT a b`, `MUL a b` | a × b |
| `DIV a b` | a ÷ b |
| `MOD a b` | remainder of a ÷ b, with the sign of a |
| `POW a b`, `POWER a b` | a to the power b |
| `MIN a b`, `MAX a b` | the smaller or larger |
| `LOG a` | natural logarithm |
| `FLOOR a`, `FLR a` | round down |
| `CEIL a` | round up |

## Text and data

| Instruction | Effect |
|-------------|--------|
| `NUM a`   | ACC = a as a number |
| `STR a`   | ACC = a as text |
| `CAT a b` | ACC = the text of a followed by the text of b |
| `SLC a b` | ACC = the characters of ACC from index a up to index b |
| `LEN a`   | ACC = the number of characters in a |
| `MOV a d`, `MOVE a d` | d = a |

`SLC` indexes from zero. A negative index counts back from the end and
indexes past either end are clamped.

*/
