use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// One integer per letter, all starting at zero. Names are case-insensitive.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Var {
    vars: [i32; 26],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    fn slot(var_name: char) -> Option<usize> {
        if var_name.is_ascii_alphabetic() {
            Some((var_name.to_ascii_uppercase() as u8 - b'A') as usize)
        } else {
            None
        }
    }

    /// Anything that is not a letter reads as zero.
    pub fn fetch(&self, var_name: char) -> i32 {
        match Var::slot(var_name) {
            Some(slot) => self.vars[slot],
            None => 0,
        }
    }

    pub fn store(&mut self, var_name: char, value: i32) -> Result<()> {
        match Var::slot(var_name) {
            Some(slot) => {
                self.vars[slot] = value;
                Ok(())
            }
            None => Err(error!(InvalidVariableName; var_name)),
        }
    }
}
