//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the host filesystem and streams their output.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::config::{CAT_NO_FILE, CP_USAGE, SEPARATOR};
use crate::core::error::{CommandError, IoContext};
use crate::core::filesystem;
use crate::models::{OutputLine, Span, Style};
use crate::utils::{cat_style, format_size, ls_style};

use super::{Command, CopyRequest, OutputSink, PathArg};

/// Execute a parsed command, writing its lines to `out`.
///
/// Relative paths are resolved against `cwd`. Operational errors are caught
/// here and written as error lines; only failures of `out` itself are
/// returned.
pub fn execute_command(cmd: Command, cwd: &Path, out: &mut OutputSink<'_>) -> io::Result<()> {
    debug!("executing {:?} in {}", cmd, cwd.display());
    match cmd {
        Command::Pwd => out.line(OutputLine::text(cwd.display().to_string())),
        Command::Ls(path) => execute_ls(path, cwd, out),
        Command::Cat(Some(file)) => execute_cat(&file, cwd, out),
        Command::Cat(None) => out.line(OutputLine::text(CAT_NO_FILE)),
        Command::Cp(Some(request)) => execute_cp(&request, cwd, out),
        Command::Cp(None) => out.lines(CP_USAGE.iter().copied()),
        Command::Unknown(name) => out.line(OutputLine::text(format!("Unknown command: {}", name))),
    }
}

/// Execute `ls` command.
///
/// Everything goes on one line: the path prefix, directories, then files.
fn execute_ls(path: Option<PathArg>, cwd: &Path, out: &mut OutputSink<'_>) -> io::Result<()> {
    let (target, label) = match path {
        Some(arg) => (filesystem::resolve(cwd, arg.as_str()), arg.to_string()),
        None => (cwd.to_path_buf(), cwd.display().to_string()),
    };
    let prefix = format!("{}: ", label);

    let listing = match filesystem::list_dir(&target) {
        Ok(listing) => listing,
        Err(e) => return out.error(Some(prefix), &e),
    };

    let dirs = listing
        .dirs
        .iter()
        .map(|d| Span::new(format!("{}/", d.name), Style::DIRECTORY));
    let files = listing.files.iter().map(|f| {
        Span::new(
            format!("{} ({})", f.name, format_size(f.size)),
            ls_style(&f.path),
        )
    });

    let mut line = OutputLine::text(prefix);
    for (i, span) in dirs.chain(files).enumerate() {
        if i > 0 {
            line = line.push(Span::plain(" "));
        }
        line = line.push(span);
    }
    out.line(line)
}

/// Execute `cat` command.
///
/// Lines are written as they are read. The header is printed before the
/// file is opened, so a missing file still shows the header and first
/// separator. The closing separator only follows a complete read.
fn execute_cat(file: &PathArg, cwd: &Path, out: &mut OutputSink<'_>) -> io::Result<()> {
    let path = filesystem::resolve(cwd, file.as_str());
    out.line(OutputLine::text(format!(
        "Contents of file {}:",
        path.display()
    )))?;
    out.line(OutputLine::text(SEPARATOR))?;

    let style = cat_style(&path);
    match stream_lines(&path, style, out)? {
        Ok(()) => out.line(OutputLine::text(SEPARATOR)),
        Err(e) => out.error(None, &e),
    }
}

/// Write each line of a text file to `out`. The file is closed on return.
///
/// The outer result carries sink failures, the inner one read failures.
fn stream_lines(
    path: &Path,
    style: Style,
    out: &mut OutputSink<'_>,
) -> io::Result<Result<(), CommandError>> {
    let file = match File::open(path).at(path) {
        Ok(file) => file,
        Err(e) => return Ok(Err(e)),
    };
    for line in BufReader::new(file).lines() {
        match line.at(path) {
            Ok(line) => out.line(OutputLine::styled(line, style))?,
            Err(e) => return Ok(Err(e)),
        }
    }
    Ok(Ok(()))
}

/// Execute `cp` command.
fn execute_cp(request: &CopyRequest, cwd: &Path, out: &mut OutputSink<'_>) -> io::Result<()> {
    match copy(request, cwd) {
        Ok(message) => out.line(OutputLine::success(message)),
        Err(e) => out.error(None, &e),
    }
}

fn copy(request: &CopyRequest, cwd: &Path) -> Result<String, CommandError> {
    let source = filesystem::absolute(&filesystem::resolve(cwd, request.source.as_str()))?;
    let dest = filesystem::absolute(&filesystem::resolve(cwd, request.dest.as_str()))?;
    debug!(
        "cp {} -> {} (recursive: {})",
        source.display(),
        dest.display(),
        request.recursive
    );

    if source.is_file() {
        let target = filesystem::copy_file(&source, &dest)?;
        Ok(format!(
            "File copied: {} -> {}",
            source.display(),
            target.display()
        ))
    } else if source.is_dir() {
        if !request.recursive {
            return Err(CommandError::DirectoryWithoutRecursive);
        }
        filesystem::copy_dir_recursive(&source, &dest)?;
        Ok(format!(
            "Directory copied: {} -> {}",
            source.display(),
            dest.display()
        ))
    } else {
        Err(CommandError::SourceNotFound(source))
    }
}
