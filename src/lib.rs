//! icondoc - Markdown reference tables for an icon asset tree
//!
//! Reads an `assets/<Icon>/{PDF,SVG}` tree and writes per-style tables of
//! platform identifiers, plus a report of icons missing expected sizes or
//! styles.

pub mod catalog;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use catalog::{Catalog, IconGroup, PreviewPolicy, WeightEntry};
pub use discovery::{load_project, Manifest, Project};
pub use error::{IconError, Result};
pub use render::{
    compute_missing_variants, render_missing_icons, render_present_icons, MissingRecord,
};
pub use types::{FluentName, PdfName, Style, SvgName, VariantMatrix};
