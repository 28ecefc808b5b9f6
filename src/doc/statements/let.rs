/*!
# `LET <letter> = <integer>`

## Purpose
Assign a value to the variable.

## Remarks
There are 26 variables, `A` through `Z`, and each holds an integer.
Lower case letters name the same variables. All start at zero and
keep their values between runs.

## Example
```text
10 PRINT A
20 LET A = 20
30 PRINT a
RUN
0
20
```

*/
