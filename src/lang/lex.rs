use std::iter::Peekable;
use std::str::Chars;

/// Permissive integer literal. Leading whitespace is skipped, an optional
/// sign is accepted, and digits are consumed until the first non-digit.
/// Anything unparsable is zero. Values saturate at the bounds of `i32`.
pub fn literal(s: &str) -> i32 {
    let mut chars = s.trim_start().chars().peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };
    let mut value: i64 = 0;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        chars.next();
        value = (value * 10 + i64::from(digit)).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Character scanner used by the statement classifier.
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(s: &'a str) -> Scanner<'a> {
        Scanner {
            chars: s.chars().peekable(),
        }
    }

    pub fn whitespace(&mut self) -> usize {
        let mut len = 0;
        while let Some(pk) = self.chars.peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.chars.next();
            len += 1;
        }
        len
    }

    pub fn next_char(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Consumes `ch` if it is next.
    pub fn accept(&mut self, ch: char) -> bool {
        if self.chars.peek() == Some(&ch) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    /// A run of non-whitespace characters, possibly empty.
    pub fn word(&mut self) -> String {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if is_basic_whitespace(*pk) {
                break;
            }
            s.push(*pk);
            self.chars.next();
        }
        s
    }

    /// An optional sign followed by at least one digit.
    pub fn integer(&mut self) -> Option<i32> {
        let mut s = String::new();
        if let Some(sign) = self.chars.next_if(|ch| *ch == '-' || *ch == '+') {
            s.push(sign);
        }
        while let Some(digit) = self.chars.next_if(|ch| is_basic_digit(*ch)) {
            s.push(digit);
        }
        if s.chars().any(is_basic_digit) {
            Some(literal(&s))
        } else {
            None
        }
    }

    pub fn rest(&mut self) -> String {
        self.chars.by_ref().collect()
    }

    pub fn is_empty(&mut self) -> bool {
        self.chars.peek().is_none()
    }
}
