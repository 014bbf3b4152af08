//! # Command Implementations

pub mod sweep;
