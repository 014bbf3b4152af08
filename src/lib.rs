//! # livesweep Library
//!
//! Finds Live Photo stills (`.heic`) in a directory tree and deletes the
//! `.mov` video companion sitting next to each one.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod processing;
pub mod ui;
