//! Check command implementation.
//!
//! Reports missing size/style variants without writing any files.

use crate::discovery::Manifest;
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{compute_missing_variants, MissingRecord};

pub fn run(manifest: &Manifest, printer: &Printer) -> Result<()> {
    printer.status("Checking", &display_path(&manifest.assets));
    let records = compute_missing_variants(&manifest.assets, &manifest.matrix(), &manifest.prefix)?;

    for record in &records {
        printer.warning("Missing", &describe(record));
        println!(
            "{}\t{}\t{}",
            record.group,
            record.style,
            record.sizes_label()
        );
    }

    if records.is_empty() {
        printer.info("Finished", "every icon ships all sizes and styles");
        return Ok(());
    }

    Err(IconError::Check {
        message: format!("{} missing", plural(records.len(), "variant set", "variant sets")),
        help: Some(
            "Add the missing SVG files or narrow `sizes`/`styles` in icondoc.yaml".to_string(),
        ),
    })
}

fn describe(record: &MissingRecord) -> String {
    format!(
        "{} {} ({})",
        record.group,
        record.style,
        record.sizes_label()
    )
}
