//! Per-icon aggregation of platform identifiers.
//!
//! Each icon group is read into a map of weight to [`WeightEntry`], holding
//! the iOS identifiers (from PDF names), the Android identifiers (from SVG
//! names), and the SVG used as the preview image. The map is local to one
//! group; nothing is shared between groups or between reports.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::discovery::{list_icon_groups, sorted_file_names, PDF_DIR, SVG_DIR};
use crate::error::Result;
use crate::types::{PdfName, SvgName};

/// How the preview SVG is chosen among the files of one weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewPolicy {
    /// The last file in sorted order.
    #[default]
    Last,
    /// The file with the greatest numeric size; sort order breaks ties.
    Largest,
}

/// Identifiers and preview for one weight of one icon group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightEntry {
    /// iOS identifiers in filename order.
    pub ios: Vec<String>,
    /// Android identifiers in filename order.
    pub android: Vec<String>,
    /// SVG filename shown in the Icon column.
    pub preview: Option<String>,
    preview_size: Option<u32>,
}

impl WeightEntry {
    fn offer_preview(&mut self, filename: &str, size: Option<u32>, policy: PreviewPolicy) {
        let replace = match policy {
            PreviewPolicy::Last => true,
            PreviewPolicy::Largest => match (size, self.preview_size) {
                (Some(candidate), Some(best)) => candidate >= best,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => true,
            },
        };

        if replace {
            self.preview = Some(filename.to_string());
            self.preview_size = size;
        }
    }
}

/// All variants of one icon, grouped by weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconGroup {
    pub name: String,
    weights: BTreeMap<String, WeightEntry>,
}

impl IconGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weights: BTreeMap::new(),
        }
    }

    /// Read the `PDF` and `SVG` folders of `assets/<name>`.
    ///
    /// A missing `PDF` folder contributes no iOS identifiers. A missing
    /// `SVG` folder is an error.
    pub fn load(assets: &Path, name: &str, policy: PreviewPolicy) -> Result<Self> {
        let mut group = Self::new(name);
        let dir = assets.join(name);

        let pdf_dir = dir.join(PDF_DIR);
        if pdf_dir.is_dir() {
            for filename in sorted_file_names(&pdf_dir)? {
                group.add_pdf(&filename)?;
            }
        }

        for filename in sorted_file_names(&dir.join(SVG_DIR))? {
            group.add_svg(&filename, policy)?;
        }

        Ok(group)
    }

    /// Record one PDF asset.
    pub fn add_pdf(&mut self, filename: &str) -> Result<()> {
        let name = PdfName::parse(filename)?;
        self.weights
            .entry(name.weight().to_string())
            .or_default()
            .ios
            .push(name.identifier());
        Ok(())
    }

    /// Record one SVG asset.
    pub fn add_svg(&mut self, filename: &str, policy: PreviewPolicy) -> Result<()> {
        let name = SvgName::parse(filename)?;
        let entry = self.weights.entry(name.weight.clone()).or_default();
        entry.android.push(name.identifier().to_string());
        entry.offer_preview(filename, name.size(), policy);
        Ok(())
    }

    pub fn weight(&self, weight: &str) -> Option<&WeightEntry> {
        self.weights.get(weight)
    }

    /// Weights seen on either platform, reverse alphabetical.
    pub fn weights(&self) -> impl Iterator<Item = (&str, &WeightEntry)> {
        self.weights.iter().rev().map(|(k, v)| (k.as_str(), v))
    }
}

/// Every icon group under an asset root, alphabetical.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub assets: PathBuf,
    groups: Vec<IconGroup>,
}

impl Catalog {
    pub fn load(assets: impl Into<PathBuf>, policy: PreviewPolicy) -> Result<Self> {
        let assets = assets.into();
        let groups = list_icon_groups(&assets)?
            .iter()
            .map(|name| IconGroup::load(&assets, name, policy))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { assets, groups })
    }

    pub fn from_groups(assets: impl Into<PathBuf>, groups: Vec<IconGroup>) -> Self {
        Self {
            assets: assets.into(),
            groups,
        }
    }

    pub fn groups(&self) -> &[IconGroup] {
        &self.groups
    }

    /// Number of groups with at least one file of `weight`.
    pub fn count_with_weight(&self, weight: &str) -> usize {
        self.groups
            .iter()
            .filter(|group| group.weight(weight).is_some())
            .count()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, names: &[&str]) {
        fs::create_dir_all(dir).unwrap();
        for name in names {
            fs::write(dir.join(name), "").unwrap();
        }
    }

    #[test]
    fn test_group_collects_both_platforms() {
        let mut group = IconGroup::new("Airplane");
        group.add_pdf("ic_fluent_airplane_20_filled.pdf").unwrap();
        group.add_pdf("ic_fluent_airplane_24_filled.pdf").unwrap();
        group
            .add_svg("ic_fluent_airplane_20_filled.svg", PreviewPolicy::Last)
            .unwrap();
        group
            .add_svg("ic_fluent_airplane_24_regular.svg", PreviewPolicy::Last)
            .unwrap();

        let filled = group.weight("filled").unwrap();
        assert_eq!(filled.ios, vec!["airplane20Filled", "airplane24Filled"]);
        assert_eq!(filled.android, vec!["ic_fluent_airplane_20_filled"]);

        let regular = group.weight("regular").unwrap();
        assert!(regular.ios.is_empty());
        assert_eq!(
            regular.preview.as_deref(),
            Some("ic_fluent_airplane_24_regular.svg")
        );
    }

    #[test]
    fn test_weights_reverse_alphabetical() {
        let mut group = IconGroup::new("Add");
        for name in [
            "ic_fluent_add_24_filled.svg",
            "ic_fluent_add_24_light.svg",
            "ic_fluent_add_24_regular.svg",
        ] {
            group.add_svg(name, PreviewPolicy::Last).unwrap();
        }

        let weights: Vec<&str> = group.weights().map(|(w, _)| w).collect();
        assert_eq!(weights, vec!["regular", "light", "filled"]);
    }

    #[test]
    fn test_preview_last_wins() {
        let mut group = IconGroup::new("Add");
        for name in [
            "ic_fluent_add_16_filled.svg",
            "ic_fluent_add_48_filled.svg",
            "ic_fluent_add_circle_20_filled.svg",
        ] {
            group.add_svg(name, PreviewPolicy::Last).unwrap();
        }

        assert_eq!(
            group.weight("filled").unwrap().preview.as_deref(),
            Some("ic_fluent_add_circle_20_filled.svg")
        );
    }

    #[test]
    fn test_preview_largest() {
        let mut group = IconGroup::new("Add");
        for name in [
            "ic_fluent_add_16_filled.svg",
            "ic_fluent_add_48_filled.svg",
            "ic_fluent_add_circle_20_filled.svg",
            "ic_fluent_add_filled.svg",
        ] {
            group.add_svg(name, PreviewPolicy::Largest).unwrap();
        }

        assert_eq!(
            group.weight("filled").unwrap().preview.as_deref(),
            Some("ic_fluent_add_48_filled.svg")
        );
    }

    #[test]
    fn test_load_group_without_pdf_folder() {
        let dir = tempdir().unwrap();
        touch(
            &dir.path().join("Airplane").join(SVG_DIR),
            &["ic_fluent_airplane_24_filled.svg"],
        );

        let group = IconGroup::load(dir.path(), "Airplane", PreviewPolicy::Last).unwrap();

        let filled = group.weight("filled").unwrap();
        assert!(filled.ios.is_empty());
        assert_eq!(filled.android, vec!["ic_fluent_airplane_24_filled"]);
    }

    #[test]
    fn test_load_group_without_svg_folder_fails() {
        let dir = tempdir().unwrap();
        touch(
            &dir.path().join("Airplane").join(PDF_DIR),
            &["ic_fluent_airplane_24_filled.pdf"],
        );

        let err = IconGroup::load(dir.path(), "Airplane", PreviewPolicy::Last).unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_pdf_fails() {
        let dir = tempdir().unwrap();
        let group_dir = dir.path().join("Airplane");
        touch(&group_dir.join(PDF_DIR), &["airplane.pdf"]);
        touch(&group_dir.join(SVG_DIR), &["ic_fluent_airplane_24_filled.svg"]);

        let err = IconGroup::load(dir.path(), "Airplane", PreviewPolicy::Last).unwrap_err();
        assert!(matches!(err, IconError::MalformedFilename { .. }));
    }

    #[test]
    fn test_catalog_sorted() {
        let dir = tempdir().unwrap();
        for name in ["Zoom", "Add"] {
            touch(
                &dir.path().join(name).join(SVG_DIR),
                &[&format!("ic_fluent_{}_24_filled.svg", name.to_lowercase())],
            );
        }

        let catalog = Catalog::load(dir.path(), PreviewPolicy::Last).unwrap();

        let names: Vec<&str> = catalog.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Add", "Zoom"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.count_with_weight("filled"), 2);
        assert_eq!(catalog.count_with_weight("regular"), 0);
    }
}
