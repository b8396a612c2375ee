//! Thin helpers over the host filesystem.
//!
//! Everything here is synchronous and runs each OS call to completion.
//! Directory entries are returned in OS enumeration order; nothing is sorted.

use std::fs;
use std::path::{Path, PathBuf};

use log::trace;

use super::error::{CommandError, IoContext};

/// Directory entry returned by [`list_dir`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    /// Size in bytes (zero for directories).
    pub size: u64,
    pub is_dir: bool,
}

/// Contents of a directory, split into subdirectories and files.
#[derive(Clone, Debug, Default)]
pub struct Listing {
    pub dirs: Vec<FileEntry>,
    pub files: Vec<FileEntry>,
}

/// Read a directory, keeping the OS order within each group.
///
/// Symlinks are followed; a dangling link is reported as a file.
pub fn list_dir(path: &Path) -> Result<Listing, CommandError> {
    let mut listing = Listing::default();
    for entry in fs::read_dir(path).at(path)? {
        let entry = entry.at(path)?;
        let entry_path = entry.path();
        let meta = match fs::metadata(&entry_path) {
            Ok(meta) => meta,
            Err(_) => entry.metadata().at(&entry_path)?,
        };
        let item = FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry_path,
            size: if meta.is_dir() { 0 } else { meta.len() },
            is_dir: meta.is_dir(),
        };
        if item.is_dir {
            listing.dirs.push(item);
        } else {
            listing.files.push(item);
        }
    }
    Ok(listing)
}

/// Resolve `arg` against `base` unless it is already absolute.
pub fn resolve(base: &Path, arg: &str) -> PathBuf {
    base.join(arg)
}

/// Make a path absolute without touching the filesystem.
pub fn absolute(path: &Path) -> Result<PathBuf, CommandError> {
    std::path::absolute(path).at(path)
}

/// Copy a single file, overwriting any existing target.
///
/// When `dest` is an existing directory the file lands inside it under its
/// own name. Returns the path actually written.
pub fn copy_file(src: &Path, dest: &Path) -> Result<PathBuf, CommandError> {
    let target = match src.file_name() {
        Some(name) if dest.is_dir() => dest.join(name),
        _ => dest.to_path_buf(),
    };
    fs::copy(src, &target).at(&target)?;
    trace!("copied {} -> {}", src.display(), target.display());
    Ok(target)
}

/// Copy a directory tree into `dest`, creating it if needed.
///
/// Files directly inside `src` are copied first, then each subdirectory is
/// copied recursively. There is no cycle detection: copying a directory into
/// itself, or through a symlink loop, does not terminate.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<(), CommandError> {
    fs::create_dir_all(dest).at(dest)?;
    let listing = list_dir(src)?;

    for file in &listing.files {
        let target = dest.join(&file.name);
        fs::copy(&file.path, &target).at(&file.path)?;
        trace!("copied {} -> {}", file.path.display(), target.display());
    }

    for dir in &listing.dirs {
        copy_dir_recursive(&dir.path, &dest.join(&dir.name))?;
    }
    Ok(())
}
