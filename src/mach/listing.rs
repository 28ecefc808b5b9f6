use crate::error;
use crate::lang::{Error, Line, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// ## Program source
///
/// Lines are kept in insertion order until sorted. Duplicate line numbers
/// are allowed; lookups see the first one.

#[derive(Debug, Clone)]
pub struct Listing {
    source: Vec<Line>,
    max_lines: usize,
    max_line_len: usize,
}

impl Default for Listing {
    fn default() -> Listing {
        Listing::new(MAX_LINES, MAX_LINE_LEN)
    }
}

pub const MAX_LINES: usize = 1000;
pub const MAX_LINE_LEN: usize = 100;

impl Listing {
    pub fn new(max_lines: usize, max_line_len: usize) -> Listing {
        Listing {
            source: vec![],
            max_lines,
            max_line_len,
        }
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn add_line(&mut self, line: Line) -> Result<()> {
        if self.source.len() >= self.max_lines {
            return Err(error!(CapacityExceeded, line.number()));
        }
        if line.text().chars().count() > self.max_line_len {
            return Err(error!(CapacityExceeded, line.number(); "LINE TOO LONG"));
        }
        self.source.push(line);
        Ok(())
    }

    /// Stable, so equal line numbers keep their insertion order.
    pub fn sort(&mut self) {
        self.source.sort_by_key(|line| line.number());
    }

    pub fn find_index(&self, number: LineNumber) -> Option<usize> {
        self.source.iter().position(|line| line.number() == number)
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.source.get(index)
    }

    pub fn lines(&mut self) -> std::slice::Iter<'_, Line> {
        self.sort();
        self.source.iter()
    }
}
