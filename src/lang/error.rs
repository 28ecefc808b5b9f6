use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    detail: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $detail:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).detail($detail)
    };
    ($err:ident, $line:expr; $detail:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .detail($detail)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            detail: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    /// Errors that end the current run. Everything else skips
    /// the offending statement and execution carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(self.code, ErrorCode::LineNotFound | ErrorCode::Break)
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn detail<T: ToString>(self, detail: T) -> Error {
        debug_assert!(self.detail.is_empty());
        Error {
            detail: detail.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    UnknownCommand,
    UnknownOperator,
    InvalidVariableName,
    LineNotFound,
    CapacityExceeded,
    Break,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_number {
            Some(number) => write!(f, "Error {{ {} IN {} }}", self, number),
            None => write!(f, "Error {{ {} }}", self),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let detail = self.detail.as_str();
        match self.code {
            SyntaxError => {
                if detail.is_empty() {
                    write!(f, "SYNTAX ERROR")
                } else {
                    write!(f, "SYNTAX ERROR IN {}", detail)
                }
            }
            UnknownCommand => write!(f, "UNKNOWN COMMAND: {}", detail),
            UnknownOperator => write!(f, "UNKNOWN OPERATOR: {}", detail),
            InvalidVariableName => write!(f, "INVALID VARIABLE NAME: {}", detail),
            LineNotFound => write!(f, "LINE {} NOT FOUND", detail),
            CapacityExceeded => {
                if detail.is_empty() {
                    write!(f, "PROGRAM TOO LARGE")
                } else {
                    write!(f, "{}", detail)
                }
            }
            Break => write!(f, "BREAK"),
        }
    }
}

impl std::error::Error for Error {}
