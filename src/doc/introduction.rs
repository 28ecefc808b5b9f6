/*!
# Introductory Tutorial for Tiny BASIC

Start the executable from a terminal. An optional number sets how many
statements run per second, which makes it easy to watch a program work.
```text
$ tinybasic 2
Running at 2 Hz
Tiny BASIC Interpreter. Type RUN to execute.
>
```

Every program line starts with a line number and a space. Lines can be
typed in any order; they always run from the lowest number up.

```text
> 20 PRINT WORLD
> 10 PRINT HELLO
> RUN
HELLO
WORLD
```

Keywords are upper case. A line the interpreter does not understand is
reported when it runs, and the rest of the program carries on.

```text
> 30 FOO BAR
> RUN
HELLO
WORLD
UNKNOWN COMMAND: FOO BAR
```

A jump to a line that does not exist stops the program. Type `EXIT`
or CTRL-D to leave.

*/
