/*!
# `IF <value> <operator> <integer> THEN <statement>`

## Purpose
Do something contingent on a comparison.

## Remarks
`<value>` is a variable or an integer. `<operator>` is one of
`=`, `>` or `<`. The statement after `THEN` must be a `PRINT` or a `GOTO`.
`PRINT` after `THEN` always prints its text as written, even a single letter.
When the comparison is false execution continues with the next line.

## Example
```text
10 LET A = 5
20 IF A > 3 THEN PRINT BIG
30 IF A < 3 THEN GOTO 10
40 PRINT DONE
RUN
BIG
DONE
```

*/
