//! Generate command implementation.
//!
//! Scans the asset tree and writes one present-icon report per style plus
//! the missing-icon report.

use std::fs;

use crate::catalog::Catalog;
use crate::discovery::Manifest;
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{
    compute_missing_variants, present_report_name, render_missing_icons, render_present_icons,
    write_report, MISSING_REPORT,
};

pub fn run(manifest: &Manifest, printer: &Printer) -> Result<()> {
    if !manifest.output.exists() {
        fs::create_dir_all(&manifest.output).map_err(|e| {
            IconError::io(
                &manifest.output,
                format!("Failed to create output directory: {}", e),
            )
        })?;
    }

    printer.status("Scanning", &display_path(&manifest.assets));
    let catalog = Catalog::load(&manifest.assets, manifest.preview)?;

    for &style in &manifest.styles {
        let path = manifest.output.join(present_report_name(style));
        write_report(&path, &render_present_icons(&catalog, style))?;

        let count = catalog.count_with_weight(style.token());
        printer.status(
            "Writing",
            &format!("{} ({})", display_path(&path), plural(count, "icon", "icons")),
        );
    }

    let records = compute_missing_variants(&manifest.assets, &manifest.matrix(), &manifest.prefix)?;
    let path = manifest.output.join(MISSING_REPORT);
    write_report(&path, &render_missing_icons(&records))?;
    printer.status(
        "Writing",
        &format!(
            "{} ({})",
            display_path(&path),
            plural(records.len(), "record", "records")
        ),
    );

    printer.status(
        "Finished",
        &format!(
            "{} from {}",
            plural(manifest.styles.len() + 1, "report", "reports"),
            plural(catalog.len(), "icon group", "icon groups")
        ),
    );

    Ok(())
}
