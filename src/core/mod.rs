//! Core logic for the command-line tool.
//!
//! This module provides:
//! - [`Command`] parsing and [`dispatch`] execution
//! - [`filesystem`] helpers over the host filesystem
//! - [`CommandError`] for operational failures

mod commands;
pub mod error;
pub mod filesystem;

pub use commands::{
    Command, CommandResult, CopyRequest, OutputSink, PathArg, dispatch, execute_command, run,
    usage,
};
pub use error::CommandError;
