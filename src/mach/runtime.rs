use super::dispatch::{dispatch, Transfer};
use super::{Listing, Pacing, Var};
use crate::config::Config;
use crate::error;
use crate::lang::{Command, Error, Line};
use log::{debug, trace, warn};
use std::collections::VecDeque;

/// ## Runtime
///
/// Owns the program, the variables, and the program counter.
/// The front end drives it by calling `execute` until it reports
/// `Event::Stopped`, handling each event as it arrives.

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    List(String),
    Error(Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum State {
    Idle,
    Running(usize),
    Halted,
}

#[derive(Debug)]
pub struct Runtime {
    listing: Listing,
    var: Var,
    pacing: Pacing,
    uniform_pacing: bool,
    state: State,
    pace_pending: bool,
    events: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(&Config::default())
    }
}

impl Runtime {
    pub fn new(config: &Config) -> Runtime {
        Runtime {
            listing: Listing::new(config.max_lines, config.max_line_len),
            var: Var::new(),
            pacing: Pacing::new(config.frequency_hz),
            uniform_pacing: config.uniform_pacing,
            state: State::Idle,
            pace_pending: false,
            events: VecDeque::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Handles one line of user input. Returns false when the user asked to exit.
    pub fn enter(&mut self, s: &str) -> bool {
        match s.parse::<Command>() {
            Ok(Command::Exit) => return false,
            Ok(Command::Run) => self.run(),
            Ok(Command::List) => {
                let lines: Vec<Event> = self
                    .list()
                    .map(|line| Event::List(line.to_string()))
                    .collect();
                self.events.extend(lines);
            }
            Ok(Command::Store(line)) => {
                if let Err(error) = self.add_line(line) {
                    self.events.push_back(Event::Error(error));
                }
            }
            Ok(Command::Empty) => {}
            Err(error) => self.events.push_back(Event::Error(error)),
        }
        true
    }

    pub fn add_line(&mut self, line: Line) -> Result<(), Error> {
        let number = line.number();
        self.listing.add_line(line).map_err(|error| {
            debug!("rejected line {}: {}", number, error);
            error
        })
    }

    /// Sorted program lines.
    pub fn list(&mut self) -> std::slice::Iter<'_, Line> {
        self.listing.lines()
    }

    pub fn run(&mut self) {
        self.listing.sort();
        debug!("run: {} lines", self.listing.len());
        self.state = State::Running(0);
        self.pace_pending = false;
    }

    pub fn interrupt(&mut self) {
        if let State::Running(pc) = self.state {
            debug!("interrupted at index {}", pc);
            self.state = State::Halted;
            self.pace_pending = false;
            self.events.push_back(Event::Error(error!(Break)));
        }
    }

    /// Executes at most `cycles` statements, returning early with the
    /// first event the front end has to see.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        for _ in 0..cycles {
            let pc = match self.state {
                State::Running(pc) => pc,
                State::Idle | State::Halted => return Event::Stopped,
            };
            if self.pace_pending {
                self.pace_pending = false;
                self.pacing.delay();
            }
            let step = match self.listing.get(pc) {
                Some(line) => {
                    trace!("pc={} line={}", pc, line.number());
                    dispatch(line, &self.listing, &mut self.var)
                }
                None => {
                    debug!("run: end of program");
                    self.state = State::Halted;
                    return Event::Stopped;
                }
            };
            self.state = match step.transfer {
                Transfer::Next => {
                    self.pace_pending = true;
                    State::Running(pc + 1)
                }
                Transfer::Jump(index) => {
                    self.pace_pending = true;
                    State::Running(index)
                }
                Transfer::ThenJump(index) => {
                    self.pace_pending = self.uniform_pacing;
                    State::Running(index)
                }
                Transfer::Abort => {
                    if let Some(Event::Error(error)) = &step.event {
                        warn!("run halted: {}", error);
                    }
                    State::Halted
                }
            };
            if let Some(event) = step.event {
                return event;
            }
        }
        Event::Running
    }
}
