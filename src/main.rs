//! # Tiny BASIC
//!
//! Interactive front end. The optional argument is the pacing frequency.
//!

use clap::Parser;
use tinybasic::mach::{MAX_LINES, MAX_LINE_LEN};
use tinybasic::{term, Config};

#[derive(Parser)]
#[command(name = "tinybasic")]
#[command(version)]
#[command(about = "A tiny line-numbered BASIC interpreter", long_about = None)]
struct Cli {
    /// Statements per second; zero or less runs at full speed
    #[arg(value_name = "FREQUENCY", allow_negative_numbers = true)]
    frequency: Option<f64>,

    /// Maximum number of stored program lines
    #[arg(long, default_value_t = MAX_LINES)]
    max_lines: usize,

    /// Maximum length of a statement
    #[arg(long, default_value_t = MAX_LINE_LEN)]
    max_line_len: usize,

    /// Delay after every statement, including jumps taken from IF
    #[arg(long)]
    uniform_pacing: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config {
        frequency_hz: cli.frequency.filter(|hz| *hz > 0.0).unwrap_or(0.0),
        max_lines: cli.max_lines,
        max_line_len: cli.max_line_len,
        uniform_pacing: cli.uniform_pacing,
    };
    if config.frequency_hz > 0.0 {
        println!("Running at {} Hz", config.frequency_hz);
    } else {
        println!("Running at unlimited speed");
    }
    term::main(&config);
}
