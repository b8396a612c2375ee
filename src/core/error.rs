//! Custom error types for the application.
//!
//! [`CommandError`] covers the operational failures a command can hit.
//! Commands catch it at their boundary and print it as `Error: <message>`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Operational errors raised while running a filesystem command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// An OS call failed on the given path.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A directory was given to `cp` without `-r`.
    #[error("use -r to copy directories")]
    DirectoryWithoutRecursive,
    /// `cp` source is neither a file nor a directory.
    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// The process working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

impl CommandError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Attach a path to an [`io::Result`].
pub trait IoContext<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T, CommandError>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T, CommandError> {
        self.map_err(|e| CommandError::io(path, e))
    }
}
