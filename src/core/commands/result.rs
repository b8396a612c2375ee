//! Command output: a streaming sink and a collected result.

use std::io;

use log::debug;

use crate::config::ERROR_PREFIX;
use crate::core::error::CommandError;
use crate::models::{OutputLine, Span, Style};

/// Where a running command sends its lines.
///
/// Each line is handed to the wrapped callback as soon as it is produced,
/// so long outputs such as `cat` of a large file are never buffered. Only
/// failures of the callback itself (e.g., a closed pipe) are returned as
/// errors; operational errors become error lines and set [`failed`].
///
/// [`failed`]: OutputSink::failed
pub struct OutputSink<'a> {
    emit: &'a mut dyn FnMut(&OutputLine) -> io::Result<()>,
    failed: bool,
}

impl<'a> OutputSink<'a> {
    pub fn new(emit: &'a mut dyn FnMut(&OutputLine) -> io::Result<()>) -> Self {
        Self {
            emit,
            failed: false,
        }
    }

    pub fn line(&mut self, line: OutputLine) -> io::Result<()> {
        (self.emit)(&line)
    }

    pub fn lines<'s>(&mut self, lines: impl IntoIterator<Item = &'s str>) -> io::Result<()> {
        lines
            .into_iter()
            .try_for_each(|text| self.line(OutputLine::text(text)))
    }

    /// Report an operational error, optionally after a plain prefix on the
    /// same line.
    pub fn error(&mut self, prefix: Option<String>, err: &CommandError) -> io::Result<()> {
        debug!("command failed: {err}");
        self.failed = true;
        let message = Span::new(format!("{ERROR_PREFIX}{err}"), Style::ERROR);
        let line = match prefix {
            Some(prefix) => OutputLine::text(prefix).push(message),
            None => OutputLine::default().push(message),
        };
        self.line(line)
    }

    /// Whether an operational error was reported.
    pub fn failed(&self) -> bool {
        self.failed
    }
}

/// Output of a command gathered in memory.
#[derive(Clone, Debug, Default)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Set when the command reported an operational error
    pub failed: bool,
}

impl CommandResult {
    /// Run `f` against a sink that keeps every line.
    pub fn collect(f: impl FnOnce(&mut OutputSink<'_>) -> io::Result<()>) -> Self {
        let mut output = Vec::new();
        let mut keep = |line: &OutputLine| -> io::Result<()> {
            output.push(line.clone());
            Ok(())
        };
        let mut sink = OutputSink::new(&mut keep);
        // Pushing to a Vec cannot fail.
        let _ = f(&mut sink);
        let failed = sink.failed();
        Self { output, failed }
    }

    /// Output with styling removed, one string per line.
    pub fn plain_lines(&self) -> Vec<String> {
        self.output.iter().map(OutputLine::plain_text).collect()
    }
}
