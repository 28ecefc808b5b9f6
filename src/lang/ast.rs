use super::LineNumber;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Rem,
    Print(Operand),
    Goto(LineNumber),
    Let(char, i32),
    If(Condition, Then),
}

/// What a PRINT statement shows.
#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    Var(char),
    Text(String),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Condition {
    pub lhs: String,
    pub op: Comparison,
    pub rhs: i32,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Comparison {
    Equal,
    Greater,
    Less,
}

impl Comparison {
    pub fn for_operator(op: &str) -> Option<Comparison> {
        match op {
            "=" => Some(Comparison::Equal),
            ">" => Some(Comparison::Greater),
            "<" => Some(Comparison::Less),
            _ => None,
        }
    }

    pub fn test(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::Greater => lhs > rhs,
            Comparison::Less => lhs < rhs,
        }
    }
}

/// The only statements allowed after THEN.
#[derive(Debug, PartialEq, Clone)]
pub enum Then {
    Print(String),
    Goto(LineNumber),
}
