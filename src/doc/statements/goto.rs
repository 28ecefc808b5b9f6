/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
If `<line number>` doesn't exist a `LINE <n> NOT FOUND` error ends the run.
When several lines share a number, execution moves to the first one entered.

## Example
```text
10 GOTO 30
20 PRINT THIS WILL NOT PRINT
30 PRINT THIS WILL PRINT
RUN
THIS WILL PRINT
```

*/
