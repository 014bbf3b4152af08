//! livesweep - Live Photo companion cleanup
//!
//! Walks a photo folder and deletes the `.mov` half of every Live Photo,
//! keeping the `.heic` still.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};

use livesweep::cli::Cli;
use livesweep::commands;
use livesweep::config;
use livesweep::ui::Log;

fn main() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);
	print_header();

	let root = config::root_dir(cli.directory);
	commands::sweep::run(&root);

	io::stdout().flush().context("Failed to flush stdout")?;
	Ok(())
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── livesweep v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
