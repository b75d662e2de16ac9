//! Missing-icon report: size and style variants an icon group lacks.

use std::path::Path;

use crate::discovery::{list_icon_groups, SVG_DIR};
use crate::error::Result;
use crate::types::{icon_key_for, FluentName, Style, VariantMatrix};

use super::MISSING_MARKER;

/// Sizes one icon group lacks for one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingRecord {
    pub group: String,
    pub style: Style,
    /// Never empty; follows the matrix size order.
    pub sizes: Vec<u32>,
}

impl MissingRecord {
    /// Comma-separated size list, e.g. `12, 48`.
    pub fn sizes_label(&self) -> String {
        self.sizes
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Find every expected SVG variant that does not exist on disk.
///
/// Only groups with an `SVG` folder are checked. Records are ordered by
/// group name, then by the matrix style order.
pub fn compute_missing_variants(
    assets: &Path,
    matrix: &VariantMatrix,
    prefix: &str,
) -> Result<Vec<MissingRecord>> {
    let mut records = Vec::new();

    for group in list_icon_groups(assets)? {
        let svg_dir = assets.join(&group).join(SVG_DIR);
        if !svg_dir.is_dir() {
            continue;
        }

        let icon_key = icon_key_for(&group);
        for &style in &matrix.styles {
            let sizes: Vec<u32> = matrix
                .sizes
                .iter()
                .copied()
                .filter(|&size| {
                    let expected = FluentName {
                        prefix,
                        icon_key: &icon_key,
                        size,
                        style,
                    };
                    !svg_dir.join(expected.to_filename()).exists()
                })
                .collect();

            if !sizes.is_empty() {
                records.push(MissingRecord {
                    group: group.clone(),
                    style,
                    sizes,
                });
            }
        }
    }

    Ok(records)
}

/// Render the Markdown table of missing variants.
pub fn render_missing_icons(records: &[MissingRecord]) -> String {
    let mut out = String::new();
    out.push_str(MISSING_MARKER);
    out.push('\n');
    out.push_str("# Missing Sizes and Styles\n\n");
    out.push_str("| Icon Name | Style | Size |\n");
    out.push_str("|-----------|-------|------|\n");

    for record in records {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            record.group,
            record.style.title(),
            record.sizes_label()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_PREFIX, DEFAULT_SIZES};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn write_svgs(assets: &Path, group: &str, names: &[String]) {
        let dir = assets.join(group).join(SVG_DIR);
        fs::create_dir_all(&dir).unwrap();
        for name in names {
            fs::write(dir.join(name), "<svg/>").unwrap();
        }
    }

    fn all_variants(key: &str) -> Vec<String> {
        VariantMatrix::default()
            .iter()
            .map(|(style, size)| format!("ic_fluent_{}_{}_{}.svg", key, size, style))
            .collect()
    }

    #[test]
    fn test_complete_group_has_no_record() {
        let dir = tempdir().unwrap();
        write_svgs(dir.path(), "Arrow Down", &all_variants("arrow_down"));

        let records =
            compute_missing_variants(dir.path(), &VariantMatrix::default(), DEFAULT_PREFIX)
                .unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_filled_sizes() {
        let dir = tempdir().unwrap();
        let names: Vec<String> = all_variants("add")
            .into_iter()
            .filter(|n| n != "ic_fluent_add_12_filled.svg" && n != "ic_fluent_add_48_filled.svg")
            .collect();
        write_svgs(dir.path(), "Add", &names);

        let records =
            compute_missing_variants(dir.path(), &VariantMatrix::default(), DEFAULT_PREFIX)
                .unwrap();

        assert_eq!(
            records,
            vec![MissingRecord {
                group: "Add".to_string(),
                style: Style::Filled,
                sizes: vec![12, 48],
            }]
        );
        assert_eq!(records[0].sizes_label(), "12, 48");
    }

    #[test]
    fn test_group_without_svg_folder_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Empty").join("PDF")).unwrap();

        let records =
            compute_missing_variants(dir.path(), &VariantMatrix::default(), DEFAULT_PREFIX)
                .unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_records_sorted_by_group_then_style() {
        let dir = tempdir().unwrap();
        write_svgs(dir.path(), "Zoom", &[]);
        write_svgs(
            dir.path(),
            "Airplane",
            &[
                "ic_fluent_airplane_16_filled.svg".to_string(),
                "ic_fluent_airplane_24_filled.svg".to_string(),
            ],
        );

        let records =
            compute_missing_variants(dir.path(), &VariantMatrix::default(), DEFAULT_PREFIX)
                .unwrap();

        let keys: Vec<(&str, Style)> = records
            .iter()
            .map(|r| (r.group.as_str(), r.style))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Airplane", Style::Regular),
                ("Airplane", Style::Filled),
                ("Zoom", Style::Regular),
                ("Zoom", Style::Filled),
            ]
        );
        assert_eq!(records[0].sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(records[1].sizes_label(), "12, 20, 28, 32, 48");
    }

    #[test]
    fn test_render_missing_icons() {
        let records = vec![MissingRecord {
            group: "Airplane".to_string(),
            style: Style::Filled,
            sizes: vec![12, 20, 28, 32, 48],
        }];

        assert_eq!(
            render_missing_icons(&records),
            "<!-- This file is generated by icondoc to list missing icons -->\n\
             # Missing Sizes and Styles\n\
             \n\
             | Icon Name | Style | Size |\n\
             |-----------|-------|------|\n\
             | Airplane | Filled | 12, 20, 28, 32, 48 |\n"
        );
    }
}
