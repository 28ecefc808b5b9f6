use super::*;
use crate::config::Config;
use crate::mach::{dispatch, Listing, State, Transfer, Var};

fn step(listing: &mut Listing, var: &mut Var, index: usize) -> Transfer {
    listing.sort();
    let line = listing.get(index).unwrap().clone();
    dispatch(&line, listing, var).transfer
}

#[test]
fn test_transfers() {
    let mut listing = Listing::default();
    let mut var = Var::new();
    listing.add_line(Line::new(10, "GOTO 30")).unwrap();
    listing.add_line(Line::new(20, "IF 1 = 1 THEN GOTO 10")).unwrap();
    listing.add_line(Line::new(30, "IF 1 = 2 THEN GOTO 10")).unwrap();
    listing.add_line(Line::new(40, "GOTO 45")).unwrap();
    assert_eq!(step(&mut listing, &mut var, 0), Transfer::Jump(2));
    assert_eq!(step(&mut listing, &mut var, 1), Transfer::ThenJump(0));
    assert_eq!(step(&mut listing, &mut var, 2), Transfer::Next);
    assert_eq!(step(&mut listing, &mut var, 3), Transfer::Abort);
}

#[test]
fn test_let_then_print() {
    let mut r = Runtime::default();
    load(&mut r, &[(10, "LET A = 2"), (20, "PRINT A")]);
    r.run();
    assert_eq!(run(&mut r), "2\n");
    assert_eq!(r.var().fetch('A'), 2);
    assert_eq!(r.state(), State::Halted);
}

#[test]
fn test_state_machine() {
    let mut r = Runtime::default();
    assert_eq!(r.state(), State::Idle);
    assert_eq!(r.execute(10), Event::Stopped);
    load(&mut r, &[(10, "REM"), (20, "REM")]);
    r.run();
    assert_eq!(r.state(), State::Running(0));
    assert_eq!(r.execute(1), Event::Running);
    assert_eq!(r.state(), State::Running(1));
    assert_eq!(r.execute(10), Event::Stopped);
    assert_eq!(r.state(), State::Halted);
}

#[test]
fn test_line_not_found_halts() {
    let mut r = Runtime::default();
    load(&mut r, &[(10, "GOTO 99"), (20, "PRINT NEVER")]);
    r.run();
    assert_eq!(run(&mut r), "LINE 99 NOT FOUND\n");
    assert_eq!(r.state(), State::Halted);
}

#[test]
fn test_goto_loop_keeps_running() {
    let mut r = Runtime::default();
    load(&mut r, &[(10, "GOTO 10")]);
    r.run();
    assert_eq!(run_cycles(&mut r, 100), "\n100 Execution cycles exceeded.\n");
    r.interrupt();
    assert_eq!(run(&mut r), "BREAK\n");
    assert_eq!(r.state(), State::Halted);
}

#[test]
fn test_variables_survive_runs() {
    let mut r = Runtime::new(&Config::default());
    load(&mut r, &[(10, "PRINT A"), (20, "LET A = 7")]);
    r.run();
    assert_eq!(run(&mut r), "0\n");
    r.run();
    assert_eq!(run(&mut r), "7\n");
}
