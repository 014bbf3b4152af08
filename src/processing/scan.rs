//! Directory walking for Live Photo stills

use std::path::Path;
use walkdir::WalkDir;

use crate::core::LivePhoto;
use crate::ui;

/// Walk `root` recursively and yield every `.heic` still with its companion path.
///
/// Only entries below `root` are visited, so a root that is itself a file
/// yields nothing. Symlinks are not descended into, and a symlink pointing at
/// a directory counts as a directory. Entries the walker cannot read
/// (including a missing root) are skipped and only mentioned in verbose mode.
pub fn find_live_photos(root: &Path) -> impl Iterator<Item = LivePhoto> {
	WalkDir::new(root)
		.min_depth(1)
		.into_iter()
		.filter_map(|entry| match entry {
			Ok(entry) => Some(entry),
			Err(e) => {
				ui::debug(&format!("Skipped: {}", e));
				None
			}
		})
		.filter(|entry| !entry.path().is_dir())
		.filter_map(|entry| LivePhoto::from_image_path(entry.path()))
}
