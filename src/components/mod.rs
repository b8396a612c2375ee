//! Terminal output.

mod output;

pub use output::{ColorChoice, StyleGuard, render_line};
