//! Companion removal

use std::fs;
use std::path::Path;

use crate::core::{DeleteError, LivePhoto, Outcome, SweepReport};
use crate::processing::scan::find_live_photos;
use crate::ui;

/// Delete the companion of one still if something is there.
///
/// Returns `None` when no companion exists. The existence check and the
/// removal are two separate calls, so a file removed by someone else in
/// between shows up as a failure.
pub fn remove_companion(photo: &LivePhoto) -> Option<Outcome> {
	if !photo.companion_exists() {
		ui::debug(&format!("No companion: {}", photo.image().display()));
		return None;
	}

	let path = photo.companion().to_path_buf();
	let outcome = match fs::remove_file(&path) {
		Ok(()) => Outcome::Deleted(path),
		Err(source) => Outcome::Failed(DeleteError { path, source }),
	};

	Some(outcome)
}

/// Sweep a whole tree, printing each deletion or failure as it happens.
///
/// Failures are recorded and the walk carries on; nothing here returns early.
pub fn sweep(root: &Path) -> SweepReport {
	let mut report = SweepReport::default();

	for photo in find_live_photos(root) {
		report.images_seen += 1;

		let Some(outcome) = remove_companion(&photo) else { continue };

		match &outcome {
			Outcome::Deleted(path) => ui::success(&format!("Deleted {}", path.display())),
			Outcome::Failed(err) => ui::error(&err.to_string()),
		}

		report.record(outcome);
	}

	report
}
