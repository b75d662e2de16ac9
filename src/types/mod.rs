//! Core domain types for icondoc.
//!
//! This module contains the fundamental types used throughout the generator:
//! - `PdfName` / `SvgName` - Parsed asset filenames
//! - `FluentName` - Expected SVG filename for a size and style
//! - `Style` / `VariantMatrix` - The sizes and styles every icon should ship

mod filename;
mod variant;

pub use filename::{icon_key_for, FluentName, PdfName, SvgName, DEFAULT_PREFIX, SEPARATOR};
pub use variant::{Style, VariantMatrix, DEFAULT_SIZES};
