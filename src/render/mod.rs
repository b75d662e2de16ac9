//! Markdown report rendering for icondoc.
//!
//! Reports are rendered to strings and written whole; every run replaces
//! the previous output.

mod missing;
mod present;

use std::fs;
use std::path::Path;

use crate::error::{IconError, Result};
use crate::types::Style;

pub use missing::{compute_missing_variants, render_missing_icons, MissingRecord};
pub use present::render_present_icons;

/// First line of every present-icon report.
pub const GENERATED_MARKER: &str = "<!-- This file is generated using icondoc -->";

/// First line of the missing-icon report.
pub const MISSING_MARKER: &str = "<!-- This file is generated by icondoc to list missing icons -->";

/// File name of the missing-icon report.
pub const MISSING_REPORT: &str = "missing_icons.md";

/// File name of the present-icon report for `style`, e.g. `icons_filled.md`.
pub fn present_report_name(style: Style) -> String {
    format!("icons_{}.md", style)
}

/// Write a rendered report, replacing any existing file.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .map_err(|e| IconError::io(path, format!("Failed to write report: {}", e)))
}

/// Path as it appears in a Markdown link.
fn link_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
