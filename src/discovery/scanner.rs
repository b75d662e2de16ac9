//! File system scanner for the icon asset tree.
//!
//! The tree is two levels deep: one directory per icon group, each holding
//! a `PDF` and an `SVG` subfolder. Listings are sorted by file name and skip
//! hidden entries such as `.DS_Store`.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::{IconError, Result};

/// Subfolder holding PDF assets (iOS identifiers).
pub const PDF_DIR: &str = "PDF";

/// Subfolder holding SVG assets (Android identifiers and previews).
pub const SVG_DIR: &str = "SVG";

/// List icon group directory names under `assets`, sorted.
pub fn list_icon_groups(assets: &Path) -> Result<Vec<String>> {
    list_entries(assets, |entry| entry.file_type().is_dir())
}

/// List file names directly inside `dir`, sorted.
pub fn sorted_file_names(dir: &Path) -> Result<Vec<String>> {
    list_entries(dir, |entry| !entry.file_type().is_dir())
}

fn list_entries(dir: &Path, keep: impl Fn(&DirEntry) -> bool) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            IconError::io(path, e)
        })?;

        if is_hidden(&entry) || !keep(&entry) {
            continue;
        }

        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
