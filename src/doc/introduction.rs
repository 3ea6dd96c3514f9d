/*!
# Introductory Tutorial for SASM

A program is a text file with one instruction per line. Run it by
passing the file to the executable.

```text
$ sasm hello.sasm
Hello World
```

Here is `hello.sasm`. The first word on a line is the instruction and
the words after it are its operands. `MOV` copies its first operand into
its second, and `OUT` is the console.

```text
mov "Hello World" out
```

Instructions and operand names may be written in any case. Everything
after `//` is a comment. Blank lines and comment lines do nothing and
the machine never stops on them.

Arithmetic always leaves its result in the accumulator, `ACC`.

```text
add 2 3       // ACC is 5
mult acc 10   // ACC is 50
mov acc out   // prints 50
```

When the last line finishes, execution wraps around to the first line.
A program runs until you stop it with CTRL-C or until the step limit
given with `--steps` is reached.

Programs make decisions with test instructions. A test that fails
skips the line right after it. Combined with a jump this builds loops.

```text
@loop
add acc 1
mov acc out
tge acc 10
jump @end
jump @loop
@end
jump @end
```

A line holding nothing but `@name` is a label. Jumps to a label continue
on the line after it. The last line jumps to itself so the program idles
instead of wrapping around. When a line asks for `IN`, the program waits until
you type a value and press ENTER. Text that reads as a number is entered
as a number.

*/
