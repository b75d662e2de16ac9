//! Style and size enumerations, and the expected variant matrix.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sizes every icon is expected to ship in, smallest first.
pub const DEFAULT_SIZES: [u32; 7] = [12, 16, 20, 24, 28, 32, 48];

/// Icon style (the weight token at the end of a filename).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Regular,
    Filled,
}

impl Style {
    /// All styles in report order.
    pub const ALL: [Style; 2] = [Style::Regular, Style::Filled];

    /// The lowercase token used in filenames.
    pub fn token(self) -> &'static str {
        match self {
            Style::Regular => "regular",
            Style::Filled => "filled",
        }
    }

    /// Capitalized label used in report headings and rows.
    pub fn title(self) -> &'static str {
        match self {
            Style::Regular => "Regular",
            Style::Filled => "Filled",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Cartesian product of sizes and styles that each icon group should provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantMatrix {
    pub sizes: Vec<u32>,
    pub styles: Vec<Style>,
}

impl Default for VariantMatrix {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            styles: Style::ALL.to_vec(),
        }
    }
}

impl VariantMatrix {
    pub fn new(sizes: Vec<u32>, styles: Vec<Style>) -> Self {
        Self { sizes, styles }
    }

    /// Iterate `(style, size)` pairs, sizes in order within each style.
    pub fn iter(&self) -> impl Iterator<Item = (Style, u32)> + '_ {
        self.styles
            .iter()
            .flat_map(move |&style| self.sizes.iter().map(move |&size| (style, size)))
    }

    /// Number of expected variants per icon group.
    pub fn len(&self) -> usize {
        self.sizes.len() * self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
