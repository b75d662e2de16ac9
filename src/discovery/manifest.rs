//! Project manifest (icondoc.yaml) parsing.
//!
//! The manifest overrides where assets are read from, where reports are
//! written, and which sizes and styles every icon is expected to ship.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::PreviewPolicy;
use crate::error::{IconError, Result};
use crate::types::{Style, VariantMatrix, DEFAULT_PREFIX, DEFAULT_SIZES};

/// Project manifest loaded from icondoc.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Root of the icon asset tree.
    pub assets: PathBuf,

    /// Directory the Markdown reports are written to.
    pub output: PathBuf,

    /// Leading tokens of expected SVG filenames.
    pub prefix: String,

    /// Sizes every icon should provide, in report order.
    pub sizes: Vec<u32>,

    /// Styles every icon should provide, in report order.
    pub styles: Vec<Style>,

    /// Which SVG represents a weight in the Icon column.
    pub preview: PreviewPolicy,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            output: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            sizes: DEFAULT_SIZES.to_vec(),
            styles: Style::ALL.to_vec(),
            preview: PreviewPolicy::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from an icondoc.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| IconError::io(path, format!("Failed to read manifest: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check icondoc.yaml syntax".to_string()),
        })
    }

    /// The expected size/style matrix for the missing-icon report.
    pub fn matrix(&self) -> VariantMatrix {
        VariantMatrix::new(self.sizes.clone(), self.styles.clone())
    }
}
