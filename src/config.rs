//! Application configuration and constants

use std::path::PathBuf;

// === File Suffixes ===
/// Marker for Live Photo stills. Matched case-insensitively.
pub const IMAGE_SUFFIX: &str = ".heic";
/// Marker for the video half of a Live Photo. Always written lowercase.
pub const COMPANION_SUFFIX: &str = ".mov";

// === Environment ===
pub const ROOT_DIR_ENV: &str = "LIVESWEEP_DIR";
pub const DEFAULT_ROOT: &str = ".";

/// Resolve the directory to sweep (--dir, then LIVESWEEP_DIR, then cwd).
///
/// The result is never checked for existence; a missing root just walks nothing.
pub fn root_dir(cli_dir: Option<PathBuf>) -> PathBuf {
	if let Some(dir) = cli_dir {
		crate::ui::debug(&format!("Using --dir: {}", dir.display()));
		return dir;
	}

	if let Ok(env_path) = std::env::var(ROOT_DIR_ENV) {
		if !env_path.trim().is_empty() {
			crate::ui::debug(&format!("Using {}: {}", ROOT_DIR_ENV, env_path));
			return PathBuf::from(env_path);
		}
	}

	crate::ui::debug("No directory given, using current directory");
	PathBuf::from(DEFAULT_ROOT)
}
