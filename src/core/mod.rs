//! Core domain types

pub mod live_photo;
pub mod outcome;

pub use live_photo::LivePhoto;
pub use outcome::{DeleteError, Outcome, SweepReport};
