/*!
## Rust Machine Module

This Rust module stores BASIC programs and executes them one line at a time.

*/

mod dispatch;
mod eval;
mod listing;
mod pacing;
mod runtime;
mod var;

pub use dispatch::dispatch;
pub use dispatch::Step;
pub use dispatch::Transfer;
pub use eval::resolve;
pub use listing::Listing;
pub use listing::MAX_LINES;
pub use listing::MAX_LINE_LEN;
pub use pacing::Pacing;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use var::Var;

#[cfg(test)]
mod tests;
