//! Data models for command output.

mod terminal;

pub use terminal::{OutputLine, Span, Style};
