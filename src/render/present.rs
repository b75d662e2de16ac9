//! Present-icon report: one table row per icon group that ships a style.

use std::path::Path;

use crate::catalog::{Catalog, IconGroup, WeightEntry};
use crate::discovery::SVG_DIR;
use crate::types::Style;

use super::{link_path, GENERATED_MARKER};

/// Display box for the preview image, in pixels.
const PREVIEW_SIZE: u32 = 24;

/// Separator between identifiers inside one table cell.
const LINE_BREAK: &str = "<br />";

/// Render the Markdown table of every icon group that ships `style`.
///
/// Groups appear alphabetically. A group contributes at most one row: the
/// one for the weight equal to `style`.
pub fn render_present_icons(catalog: &Catalog, style: Style) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_MARKER);
    out.push('\n');
    out.push_str(&format!("# {} Icons\n", style.title()));
    out.push('\n');
    out.push_str("|Name|Icon|iOS|Android|\n");
    out.push_str("|---|---|---|---|\n");

    for group in catalog.groups() {
        for (weight, entry) in group.weights() {
            if weight != style.token() {
                continue;
            }
            out.push_str(&render_row(&catalog.assets, group, entry));
        }
    }

    out
}

fn render_row(assets: &Path, group: &IconGroup, entry: &WeightEntry) -> String {
    let icon = match &entry.preview {
        Some(preview) => {
            let svg_dir = link_path(&assets.join(&group.name).join(SVG_DIR));
            format!(
                r#"<img src="{}/{}?raw=true" width="{}" height="{}">"#,
                svg_dir, preview, PREVIEW_SIZE, PREVIEW_SIZE
            )
        }
        None => String::new(),
    };

    format!(
        "|{}|{}|{}|{}|\n",
        group.name,
        icon,
        code_list(&entry.ios),
        code_list(&entry.android)
    )
}

fn code_list(identifiers: &[String]) -> String {
    identifiers
        .iter()
        .map(|id| format!("`{}`", id))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}
