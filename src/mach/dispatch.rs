use super::{eval::resolve, Event, Listing, Var};
use crate::error;
use crate::lang::ast::*;
use crate::lang::{parse, Line, LineNumber};

/// Where the program counter goes after a statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transfer {
    Next,
    Jump(usize),
    /// A jump taken from a true IF. Not followed by a pacing delay.
    ThenJump(usize),
    Abort,
}

#[derive(Debug)]
pub struct Step {
    pub transfer: Transfer,
    pub event: Option<Event>,
}

impl Step {
    fn next() -> Step {
        Step {
            transfer: Transfer::Next,
            event: None,
        }
    }

    fn print(s: String) -> Step {
        Step {
            transfer: Transfer::Next,
            event: Some(Event::Print(s)),
        }
    }

    fn jump(
        listing: &Listing,
        from: LineNumber,
        target: LineNumber,
        transfer: fn(usize) -> Transfer,
    ) -> Step {
        match listing.find_index(target) {
            Some(index) => Step {
                transfer: transfer(index),
                event: None,
            },
            None => Step {
                transfer: Transfer::Abort,
                event: Some(Event::Error(error!(LineNotFound, from; target))),
            },
        }
    }
}

/// Classifies and executes one program line against a sorted listing.
pub fn dispatch(line: &Line, listing: &Listing, var: &mut Var) -> Step {
    let number = line.number();
    let statement = match parse(number, line.text()) {
        Ok(statement) => statement,
        Err(error) => {
            return Step {
                transfer: Transfer::Next,
                event: Some(Event::Error(error)),
            }
        }
    };
    match statement {
        Statement::Rem => Step::next(),
        Statement::Print(Operand::Var(var_name)) => {
            Step::print(var.fetch(var_name).to_string())
        }
        Statement::Print(Operand::Text(s)) => Step::print(s),
        Statement::Goto(target) => Step::jump(listing, number, target, Transfer::Jump),
        Statement::Let(var_name, value) => match var.store(var_name, value) {
            Ok(()) => Step::next(),
            Err(error) => Step {
                transfer: Transfer::Next,
                event: Some(Event::Error(error.in_line_number(number))),
            },
        },
        Statement::If(condition, then) => {
            let lhs = resolve(&condition.lhs, var);
            if !condition.op.test(lhs, condition.rhs) {
                return Step::next();
            }
            match then {
                Then::Print(s) => Step::print(s),
                Then::Goto(target) => Step::jump(listing, number, target, Transfer::ThenJump),
            }
        }
    }
}
