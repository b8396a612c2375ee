//! Rendering of output lines to a terminal or pipe.

use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;

use crate::models::{OutputLine, Style};

const RESET: &str = "\x1b[0m";

/// When to emit ANSI styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Style only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide for standard output.
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Scoped foreground style.
///
/// Writes the style's escape sequence on creation and the reset sequence on
/// drop, so the terminal is back to its default on every exit path.
pub struct StyleGuard<'a, W: Write> {
    out: &'a mut W,
    active: bool,
}

impl<'a, W: Write> StyleGuard<'a, W> {
    pub fn new(out: &'a mut W, style: Style, color: bool) -> io::Result<Self> {
        let active = match style.sgr() {
            Some(code) if color => {
                write!(out, "\x1b[{}m", code)?;
                true
            }
            _ => false,
        };
        Ok(Self { out, active })
    }

    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
}

impl<W: Write> Drop for StyleGuard<'_, W> {
    fn drop(&mut self) {
        if self.active {
            // Nothing useful to do if the reset itself cannot be written.
            let _ = self.out.write_all(RESET.as_bytes());
        }
    }
}

/// Write one line followed by a newline.
pub fn render_line<W: Write>(out: &mut W, line: &OutputLine, color: bool) -> io::Result<()> {
    for span in &line.spans {
        let mut guard = StyleGuard::new(out, span.style, color)?;
        guard.write_str(&span.text)?;
    }
    writeln!(out)
}
