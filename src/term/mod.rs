extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::config::Config;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const BANNER: &str = "Tiny BASIC Interpreter. Type RUN to execute.";

pub fn main(config: &Config) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(config, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(config: &Config, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::new(config);
    let interface = Interface::new("BASIC")?;
    interface.set_prompt("> ")?;
    interface.write_fmt(format_args!("{}\n", BANNER))?;
    // A paced program sleeps between statements, so hand control back
    // after every one of them to notice Ctrl-C promptly.
    let cycles = if runtime.pacing().is_unlimited() {
        5000
    } else {
        1
    };

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(cycles) {
            Event::Stopped => {
                let string = match interface.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                if !runtime.enter(&string) {
                    break;
                }
                if !string.trim().is_empty() {
                    interface.add_history_unique(string);
                }
            }
            Event::Running => {}
            Event::Print(s) | Event::List(s) => {
                interface.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Error(error) => {
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
        }
    }
    Ok(())
}
