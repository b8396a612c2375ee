//! Formatting utilities for display values.

use crate::config::SIZE_UNITS;

/// Format a byte count using binary units (e.g., "1.5 KB", "0 B").
///
/// The value is divided by 1024 until it drops below 1024 or the largest
/// unit is reached, then printed with at most two fractional digits.
/// Ties round away from zero (1152 bytes is "1.13 KB").
pub fn format_size(bytes: u64) -> String {
    let (value, unit) = scale_size(bytes);
    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{:.2}", rounded);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Scale a byte count to its display value and unit index.
fn scale_size(bytes: u64) -> (f64, usize) {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    (value, unit)
}
