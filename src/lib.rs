//! # Tiny BASIC
//!
//! A line-numbered BASIC in the spirit of the earliest home computers.
//! Type numbered lines to store a program, `LIST` to see it, and `RUN`
//! to execute it.
//! ```text
//! > 10 LET A = 5
//! > 20 IF A > 3 THEN PRINT BIG
//! > 30 PRINT A
//! > RUN
//! BIG
//! 5
//! ```
//!
//! The statements are `REM`, `PRINT`, `GOTO`, `LET` and `IF ... THEN`.
//! Variables are the single letters `A` through `Z` and hold integers.
//! Keywords must be typed in upper case.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

pub mod config;
pub mod lang;
pub mod mach;
pub mod term;

pub use config::Config;
