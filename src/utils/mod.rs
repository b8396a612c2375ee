//! Pure formatting helpers.
//!
//! Provides:
//! - [`format_size`] - binary-unit byte counts
//! - [`ls_style`], [`cat_style`] - extension-based display styles

mod color;
mod format;

pub use color::{cat_style, ls_style};
pub use format::format_size;
