//! Per-file results of a sweep

use std::io;
use std::path::{Path, PathBuf};

/// A companion existed but could not be removed
#[derive(Debug, thiserror::Error)]
#[error("Error deleting {}: {source}", path.display())]
pub struct DeleteError {
	pub path: PathBuf,
	#[source]
	pub source: io::Error,
}

/// What happened to one companion that was found on disk
#[derive(Debug)]
pub enum Outcome {
	Deleted(PathBuf),
	Failed(DeleteError),
}

impl Outcome {
	pub fn path(&self) -> &Path {
		match self {
			Outcome::Deleted(path) => path,
			Outcome::Failed(err) => &err.path,
		}
	}

	pub fn is_deleted(&self) -> bool {
		matches!(self, Outcome::Deleted(_))
	}
}

/// Everything one pass over a tree did, in visit order
#[derive(Debug, Default)]
pub struct SweepReport {
	pub images_seen: usize,
	pub outcomes: Vec<Outcome>,
}

impl SweepReport {
	pub fn record(&mut self, outcome: Outcome) {
		self.outcomes.push(outcome);
	}

	pub fn deleted(&self) -> impl Iterator<Item = &Path> {
		self.outcomes
			.iter()
			.filter_map(|o| match o {
				Outcome::Deleted(path) => Some(path.as_path()),
				Outcome::Failed(_) => None,
			})
	}

	pub fn failed(&self) -> impl Iterator<Item = &DeleteError> {
		self.outcomes
			.iter()
			.filter_map(|o| match o {
				Outcome::Failed(err) => Some(err),
				Outcome::Deleted(_) => None,
			})
	}

	pub fn deleted_count(&self) -> usize {
		self.outcomes.iter().filter(|o| o.is_deleted()).count()
	}

	pub fn error_count(&self) -> usize {
		self.outcomes.len() - self.deleted_count()
	}
}
