/*!
# `LIST`

## Purpose
Show the BASIC program currently in memory.

## Remarks
Lines are shown in line number order.

## Example
```text
20 PRINT WORLD
10 PRINT HELLO
LIST
10 PRINT HELLO
20 PRINT WORLD
```

*/
