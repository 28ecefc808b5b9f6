use crate::mach::{MAX_LINES, MAX_LINE_LEN};

/// Settings fixed for the lifetime of a [`Runtime`](crate::mach::Runtime).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Statements per second. Zero or less runs at full speed.
    pub frequency_hz: f64,
    pub max_lines: usize,
    pub max_line_len: usize,
    /// Also delay after a jump taken from a true IF.
    pub uniform_pacing: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            frequency_hz: 0.0,
            max_lines: MAX_LINES,
            max_line_len: MAX_LINE_LEN,
            uniform_pacing: false,
        }
    }
}
