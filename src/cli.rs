use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::ROOT_DIR_ENV;

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "livesweep",
	author,
	version,
	about = "Delete Live Photo .mov companions next to .heic images",
	styles = styles(),
	after_help = format!(
		"{title}
  {bin} {dir_args}    {dir_desc}
  {bin} {verbose_args}                  {verbose_desc}
  {env}=~/Photos {bin}     {env_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "livesweep".bright_blue(),
		dir_args = "-d ~/Photos/Export".yellow(),
		dir_desc = "Sweep an export folder recursively".dimmed(),
		verbose_args = "-v".yellow(),
		verbose_desc = "Sweep the current directory, show skipped entries".dimmed(),
		env = ROOT_DIR_ENV.yellow(),
		env_desc = "Take the folder from the environment".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose")]
	pub verbose: bool,

	/// Root directory to sweep (falls back to $LIVESWEEP_DIR, then ".")
	#[arg(short = 'd', long = "dir", value_name = "PATH")]
	pub directory: Option<PathBuf>,
}
