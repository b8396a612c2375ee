//! Application configuration.
//!
//! Centralizes the fixed text and constants used by the commands.

// =============================================================================
// Usage Text
// =============================================================================

/// Summary printed when no command is given.
pub const USAGE_SUMMARY: &[&str] = &[
    "pwd - show the current directory",
    "ls [path] - list files and directories",
    "cat <file> - show file contents",
];

/// Usage printed by `cp` when source or destination is missing.
pub const CP_USAGE: &[&str] = &[
    "Usage: cp [-r|--recursive] <source> <destination>",
    "Examples:",
    "  cp file.txt backup/file.txt",
    "  cp -r dir1/ dir2/",
];

/// Message printed by `cat` without a file argument.
pub const CAT_NO_FILE: &str = "No file specified";

// =============================================================================
// Output Formatting
// =============================================================================

/// Separator framing `cat` output.
pub const SEPARATOR: &str = "----------------------------------------";

/// Prefix for operational error lines.
pub const ERROR_PREFIX: &str = "Error: ";

/// Units for human-readable sizes, in ascending order.
pub const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
