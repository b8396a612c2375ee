//! Minimal filesystem commands: `pwd`, `ls`, `cat` and `cp`.
//!
//! Commands are parsed from command-line tokens, executed against the host
//! filesystem, and stream styled [`models::OutputLine`]s through an
//! [`OutputSink`] that [`components::render_line`] writes to a terminal.

pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{CommandResult, OutputSink, dispatch};
