//! Tree walking and companion removal

pub mod scan;
pub mod sweep;

pub use scan::find_live_photos;
pub use sweep::{remove_companion, sweep};
