use super::{ast::*, lex::Scanner, literal, Error, LineNumber};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Classifies the text of one program line. Keywords are matched
/// case-sensitively in a fixed order and the first match wins.
pub fn parse(line_number: LineNumber, text: &str) -> Result<Statement> {
    match Statement::for_text(text) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

impl Statement {
    fn for_text(text: &str) -> Result<Statement> {
        if text.starts_with("REM") {
            Ok(Statement::Rem)
        } else if let Some(operand) = text.strip_prefix("PRINT ") {
            Ok(Statement::Print(Operand::for_text(operand)))
        } else if let Some(target) = text.strip_prefix("GOTO ") {
            Ok(Statement::Goto(literal(target)))
        } else if let Some(rest) = text.strip_prefix("LET ") {
            Statement::let_statement(&mut Scanner::new(rest))
        } else if let Some(rest) = text.strip_prefix("IF ") {
            Statement::if_statement(&mut Scanner::new(rest))
        } else {
            Err(error!(UnknownCommand; text))
        }
    }

    fn let_statement(scan: &mut Scanner) -> Result<Statement> {
        scan.whitespace();
        let var = match scan.next_char() {
            Some(ch) => ch,
            None => return Err(error!(SyntaxError; "LET")),
        };
        scan.whitespace();
        if !scan.accept('=') {
            return Err(error!(SyntaxError; "LET"));
        }
        scan.whitespace();
        let value = match scan.integer() {
            Some(value) => value,
            None => return Err(error!(SyntaxError; "LET")),
        };
        scan.whitespace();
        if !scan.is_empty() {
            return Err(error!(SyntaxError; "LET"));
        }
        Ok(Statement::Let(var, value))
    }

    fn if_statement(scan: &mut Scanner) -> Result<Statement> {
        scan.whitespace();
        let lhs = scan.word();
        scan.whitespace();
        let op = scan.word();
        if lhs.is_empty() || op.is_empty() {
            return Err(error!(SyntaxError; "IF"));
        }
        let op = match Comparison::for_operator(&op) {
            Some(op) => op,
            None => return Err(error!(UnknownOperator; op)),
        };
        scan.whitespace();
        let rhs = match scan.integer() {
            Some(rhs) => rhs,
            None => return Err(error!(SyntaxError; "IF")),
        };
        scan.whitespace();
        if scan.word() != "THEN" {
            return Err(error!(SyntaxError; "IF"));
        }
        scan.whitespace();
        let then = Then::for_text(&scan.rest())?;
        Ok(Statement::If(Condition { lhs, op, rhs }, then))
    }
}

impl Operand {
    fn for_text(text: &str) -> Operand {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => Operand::Var(ch.to_ascii_uppercase()),
            _ => Operand::Text(text.to_string()),
        }
    }
}

impl Then {
    fn for_text(text: &str) -> Result<Then> {
        if let Some(text) = text.strip_prefix("PRINT ") {
            Ok(Then::Print(text.to_string()))
        } else if let Some(target) = text.strip_prefix("GOTO ") {
            Ok(Then::Goto(literal(target)))
        } else {
            Err(error!(SyntaxError; "IF"))
        }
    }
}
