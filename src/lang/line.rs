use super::LineNumber;

/// One stored program line: the user's line number and the statement
/// text exactly as typed after the first space.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    text: String,
}

impl Line {
    pub fn new<T: Into<String>>(number: LineNumber, text: T) -> Line {
        Line {
            number,
            text: text.into(),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let line = Line::new(10, "PRINT HELLO");
        assert_eq!(line.to_string(), "10 PRINT HELLO");
    }
}
