/*!
# `RUN`

## Purpose
Start the program from its lowest line number.

## Remarks
Variables are not cleared. Stop a running program with CTRL-C.

## Example
```text
10 PRINT HELLO WORLD
RUN
HELLO WORLD
```

*/
