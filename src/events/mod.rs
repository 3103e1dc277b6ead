//! Event handling module.
//!
//! Terminal events: user input and ticks polled from the terminal.

pub mod terminal;
