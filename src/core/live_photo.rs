//! Live Photo detection by file name

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::{COMPANION_SUFFIX, IMAGE_SUFFIX};

/// A `.heic` still and the path its video companion would have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivePhoto {
	image: PathBuf,
	companion: PathBuf,
}

impl LivePhoto {
	/// Match a path against the image suffix and derive its companion.
	///
	/// The suffix test ignores case, but the stem keeps the original case:
	/// `IMG_0001.HEIC` pairs with `IMG_0001.mov`. The comparison works on raw
	/// name bytes, so names that are not valid UTF-8 still match.
	pub fn from_image_path(path: &Path) -> Option<Self> {
		let name = path.file_name()?;
		let stem = strip_suffix_ignore_case(name, IMAGE_SUFFIX)?;

		let mut companion_name = stem.to_os_string();
		companion_name.push(COMPANION_SUFFIX);
		let companion = match path.parent() {
			Some(parent) => parent.join(companion_name),
			None => PathBuf::from(companion_name),
		};

		Some(Self {
			image: path.to_path_buf(),
			companion,
		})
	}

	pub fn image(&self) -> &Path {
		&self.image
	}

	pub fn companion(&self) -> &Path {
		&self.companion
	}

	/// Whether anything exists at the companion path (file, dir or followed symlink)
	pub fn companion_exists(&self) -> bool {
		self.companion.exists()
	}
}

/// `name` minus `suffix` if it ends with it, ASCII case ignored.
///
/// `suffix` must be ASCII.
fn strip_suffix_ignore_case<'a>(name: &'a OsStr, suffix: &str) -> Option<&'a OsStr> {
	let bytes = name.as_encoded_bytes();
	let split = bytes.len().checked_sub(suffix.len())?;

	if !bytes[split..].eq_ignore_ascii_case(suffix.as_bytes()) {
		return None;
	}

	// SAFETY: the tail matched an ASCII suffix, so `split` sits right before
	// a non-empty UTF-8 substring, which is a valid split point.
	Some(unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[..split]) })
}
