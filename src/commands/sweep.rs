//! Sweep command - remove Live Photo video companions

use std::path::Path;

use crate::core::SweepReport;
use crate::processing;
use crate::ui;

pub fn run(dir: &Path) -> SweepReport {
    ui::info(&format!("Scanning: {}", dir.display()));

    let report = processing::sweep(dir);

    if report.images_seen == 0 {
        ui::debug("No .heic images found");
    }

    ui::summary(report.images_seen, report.deleted_count(), report.error_count());

    if report.error_count() > 0 {
        ui::warn(&format!("{} companions could not be deleted", report.error_count()));
    }
    ui::success("Cleanup complete!");

    report
}
