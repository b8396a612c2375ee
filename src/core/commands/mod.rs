//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed invocations
//! - `OutputSink` for streaming output and `CommandResult` for collected output
//! - `dispatch` for turning raw command-line tokens into output
//!
//! # Architecture
//!
//! The first token names the command (case-insensitive) and the rest are its
//! arguments. Tokens are parsed into the `Command` enum, then executed via
//! `execute_command`, which writes lines to an `OutputSink` as they are
//! produced and never propagates operational errors.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::{CommandResult, OutputSink};

use std::env;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::USAGE_SUMMARY;
use crate::core::error::CommandError;

// =============================================================================
// Argument Types
// =============================================================================

/// A path argument passed to a command (e.g., `ls src`, `cat notes.txt`).
///
/// Stored as given; resolution against the working directory happens at
/// execution time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Arguments of a complete `cp` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyRequest {
    pub recursive: bool,
    pub source: PathArg,
    pub dest: PathArg,
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Pwd,
    /// List a directory, defaulting to the working directory.
    Ls(Option<PathArg>),
    /// Print a file. `None` prints a hint instead.
    Cat(Option<PathArg>),
    /// Copy a file or tree. `None` prints usage.
    Cp(Option<CopyRequest>),
    Unknown(String),
}

impl Command {
    /// All available command names.
    pub fn names() -> &'static [&'static str] {
        &["cat", "cp", "ls", "pwd"]
    }

    /// Parse command from name and arguments.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name.to_lowercase().as_str() {
            "pwd" => Self::Pwd,
            "ls" => Self::Ls(args.first().map(PathArg::new)),
            "cat" => Self::Cat(args.first().map(PathArg::new)),
            "cp" => Self::Cp(Self::parse_cp(args)),
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether running this command reads the working directory.
    pub fn needs_cwd(&self) -> bool {
        matches!(
            self,
            Self::Pwd | Self::Ls(_) | Self::Cat(Some(_)) | Self::Cp(Some(_))
        )
    }

    /// `-r`/`--recursive` is only recognized as the first argument.
    fn parse_cp(args: &[String]) -> Option<CopyRequest> {
        let recursive = matches!(
            args.first().map(String::as_str),
            Some("-r" | "--recursive")
        );
        let rest = if recursive { &args[1..] } else { args };
        match rest {
            [source, dest, ..] => Some(CopyRequest {
                recursive,
                source: PathArg::new(source),
                dest: PathArg::new(dest),
            }),
            _ => None,
        }
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Run one invocation from raw command-line tokens.
///
/// With no tokens the usage summary is written. Otherwise the command is
/// parsed first, and the process working directory is looked up only for
/// commands that use it.
pub fn dispatch(tokens: &[String], out: &mut OutputSink<'_>) -> io::Result<()> {
    let Some((name, args)) = tokens.split_first() else {
        return usage(out);
    };
    let cmd = Command::parse(name, args);
    debug!("parsed {:?} as {:?}", name, cmd);

    let cwd = if cmd.needs_cwd() {
        match env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => return out.error(None, &CommandError::CurrentDir(e)),
        }
    } else {
        PathBuf::new()
    };
    execute_command(cmd, &cwd, out)
}

/// Run a named command against an explicit working directory, collecting
/// its output.
pub fn run(name: &str, args: &[String], cwd: &Path) -> CommandResult {
    let cmd = Command::parse(name, args);
    CommandResult::collect(|out| execute_command(cmd, cwd, out))
}

/// Write the fixed command summary.
pub fn usage(out: &mut OutputSink<'_>) -> io::Result<()> {
    out.lines(USAGE_SUMMARY.iter().copied())
}

// =============================================================================
// Tests
// =============================================================================
