//! Extension-based display styles for `ls` and `cat`.
//!
//! The two commands use separate tables because their categories differ.
//! Extensions are matched case-insensitively, without the leading dot.

use std::path::Path;

use crate::models::Style;

type StyleTable = &'static [(&'static [&'static str], Style)];

const LS_STYLES: StyleTable = &[
    (&["exe", "bat", "cmd", "msi"], Style::Green),
    (&["jpg", "png", "gif", "bmp", "svg"], Style::Magenta),
    (&["zip", "rar", "7z", "tar", "gz"], Style::Yellow),
    (&["txt", "doc", "docx", "pdf", "rtf"], Style::Cyan),
    (&["cs", "java", "js", "py", "cpp"], Style::DarkCyan),
    (&["json", "xml", "yml", "yaml"], Style::DarkYellow),
    (&["log", "tmp"], Style::DarkGray),
];

const CAT_STYLES: StyleTable = &[
    (&["txt"], Style::White),
    (&["json", "xml"], Style::DarkYellow),
    (&["cs", "java", "js"], Style::Cyan),
    (&["html", "htm"], Style::Magenta),
    (&["log"], Style::Gray),
];

/// Fallback for extensions neither table knows.
const PLAIN: Style = Style::White;

/// Style for a file name in `ls` output.
pub fn ls_style(path: &Path) -> Style {
    lookup(LS_STYLES, path)
}

/// Style for the lines of a file printed by `cat`.
pub fn cat_style(path: &Path) -> Style {
    lookup(CAT_STYLES, path)
}

fn lookup(table: StyleTable, path: &Path) -> Style {
    let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
        return PLAIN;
    };
    table
        .iter()
        .find(|(exts, _)| exts.contains(&ext.as_str()))
        .map(|(_, style)| *style)
        .unwrap_or(PLAIN)
}
