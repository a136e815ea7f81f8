//! Terminal interaction

pub mod prompt;

pub use prompt::{Confirm, TerminalPrompt};
