use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trail")]
#[command(about = "Replay navigation scripts against the breadcrumb stack")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Stack configuration file (TOML)
	#[arg(long, short = 'c', value_name = "FILE", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Run a script of navigation steps and print the trail after each one
	Replay {
		/// Script file (TOML)
		script: PathBuf,
	},
	/// Validate a configuration file and print the resolved values
	CheckConfig {
		/// Configuration file (TOML)
		file: PathBuf,
	},
}
