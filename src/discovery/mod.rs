//! Asset tree discovery and project configuration.
//!
//! Finds the `icondoc.yaml` manifest (if any) and lists the icon groups
//! and asset files the reports are built from.

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{list_icon_groups, sorted_file_names, PDF_DIR, SVG_DIR};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "icondoc.yaml";

/// A loaded manifest and where it came from.
#[derive(Debug)]
pub struct Project {
    pub manifest: Manifest,

    /// Path of the manifest that was read, if one was found.
    pub manifest_path: Option<PathBuf>,
}

/// Load the project configuration.
///
/// An explicit `path` must exist. Otherwise `icondoc.yaml` in `root` is used
/// when present, and the defaults when not.
pub fn load_project(root: impl AsRef<Path>, path: Option<&Path>) -> Result<Project> {
    if let Some(path) = path {
        return Ok(Project {
            manifest: Manifest::load(path)?,
            manifest_path: Some(path.to_path_buf()),
        });
    }

    let default_path = root.as_ref().join(MANIFEST_FILENAME);
    if default_path.exists() {
        Ok(Project {
            manifest: Manifest::load(&default_path)?,
            manifest_path: Some(default_path),
        })
    } else {
        Ok(Project {
            manifest: Manifest::default(),
            manifest_path: None,
        })
    }
}
