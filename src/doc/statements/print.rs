/*!
# `PRINT <variable>` or `PRINT <text>`

## Purpose
Output information to the terminal for the operator.

## Remarks
A single letter prints the value of that variable.
Anything else is printed exactly as written.

## Example
```text
10 LET X = 7
20 PRINT X
30 PRINT X MARKS THE SPOT
RUN
7
X MARKS THE SPOT
```

*/
