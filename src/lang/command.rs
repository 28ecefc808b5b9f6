use super::{literal, Error, Line};
use crate::error;

/// What the user typed at the prompt.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run,
    List,
    Exit,
    Store(Line),
    Empty,
}

impl std::str::FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Command, Error> {
        let s = s.trim_end_matches(|ch: char| ch == '\n' || ch == '\r');
        match s {
            "RUN" => return Ok(Command::Run),
            "LIST" => return Ok(Command::List),
            "EXIT" => return Ok(Command::Exit),
            _ => {}
        }
        if s.trim().is_empty() {
            return Ok(Command::Empty);
        }
        match s.find(' ') {
            Some(index) => Ok(Command::Store(Line::new(
                literal(&s[..index]),
                &s[index + 1..],
            ))),
            None => Err(error!(SyntaxError)),
        }
    }
}
