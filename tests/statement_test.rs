mod common;
use common::*;
use tinybasic::mach::Runtime;

#[test]
fn test_if_then_print() {
    let mut r = Runtime::default();
    r.enter("10 LET A = 5");
    r.enter("20 IF A > 3 THEN PRINT BIG");
    r.enter("30 PRINT DONE");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "BIG\nDONE\n");
}

#[test]
fn test_if_false_falls_through() {
    let mut r = Runtime::default();
    r.enter("10 LET A = 1");
    r.enter("20 IF A > 3 THEN GOTO 50");
    r.enter("30 PRINT SMALL");
    r.enter("50 PRINT END");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "SMALL\nEND\n");
}

#[test]
fn test_if_operators() {
    let mut r = Runtime::default();
    r.enter("10 IF 2 = 2 THEN PRINT EQUAL");
    r.enter("20 IF 1 < 2 THEN PRINT LESS");
    r.enter("30 IF -1 > -2 THEN PRINT GREATER");
    r.enter("40 IF 2 < 1 THEN PRINT WRONG");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "EQUAL\nLESS\nGREATER\n");
}

#[test]
fn test_then_print_is_verbatim() {
    let mut r = Runtime::default();
    r.enter("10 LET A = 4");
    r.enter("20 IF A = 4 THEN PRINT A");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "A\n");
}

#[test]
fn test_goto_missing_line() {
    let mut r = Runtime::default();
    r.enter("10 PRINT HELLO");
    r.enter("20 GOTO 40");
    r.enter("30 PRINT NEVER");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "HELLO\nLINE 40 NOT FOUND\n");
}

#[test]
fn test_then_goto_missing_line() {
    let mut r = Runtime::default();
    r.enter("10 IF 1 = 1 THEN GOTO 99");
    r.enter("20 PRINT NEVER");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "LINE 99 NOT FOUND\n");
}

#[test]
fn test_goto_resumes_at_target() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 30");
    r.enter("20 PRINT SKIPPED");
    r.enter("30 PRINT LANDED");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "LANDED\n");
}

#[test]
fn test_countdown_loop() {
    let mut r = Runtime::default();
    r.enter("10 LET N = 3");
    r.enter("20 PRINT N");
    r.enter("30 IF N = 3 THEN GOTO 60");
    r.enter("40 IF N = 2 THEN GOTO 70");
    r.enter("50 GOTO 80");
    r.enter("60 LET N = 2");
    r.enter("65 GOTO 20");
    r.enter("70 LET N = 1");
    r.enter("75 GOTO 20");
    r.enter("80 PRINT LIFTOFF");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "3\n2\n1\nLIFTOFF\n");
}

#[test]
fn test_let_print() {
    let mut r = Runtime::default();
    r.enter("10 LET A = 2");
    r.enter("20 PRINT A");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "2\n");
}

#[test]
fn test_let_only_touches_its_variable() {
    let mut r = Runtime::default();
    r.enter("10 LET B = 9");
    r.enter("20 PRINT A");
    r.enter("30 PRINT B");
    r.enter("40 PRINT c");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "0\n9\n0\n");
}

#[test]
fn test_unknown_command() {
    let mut r = Runtime::default();
    r.enter("10 FOO BAR");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "UNKNOWN COMMAND: FOO BAR\n");
}

#[test]
fn test_recoverable_errors_continue() {
    let mut r = Runtime::default();
    r.enter("10 LET 1 = 5");
    r.enter("20 LET A 5");
    r.enter("30 IF A => 1 THEN PRINT X");
    r.enter("40 REM nothing to see");
    r.enter("50 PRINT STILL HERE");
    r.enter("RUN");
    assert_eq!(
        exec(&mut r),
        "INVALID VARIABLE NAME: 1\n\
         SYNTAX ERROR IN LET\n\
         UNKNOWN OPERATOR: =>\n\
         STILL HERE\n"
    );
}

#[test]
fn test_lines_run_in_number_order() {
    let mut r = Runtime::default();
    r.enter("30 PRINT THREE");
    r.enter("10 PRINT ONE");
    r.enter("20 PRINT TWO");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "ONE\nTWO\nTHREE\n");
}

#[test]
fn test_duplicate_lines_goto_first() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 20");
    r.enter("20 PRINT FIRST");
    r.enter("20 PRINT SECOND");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "FIRST\nSECOND\n");
}
