//! Trail command-line driver.
//!
//! Replays scripted navigation against an in-memory location bar and prints
//! the breadcrumb trail after every step. Useful for checking how a sequence
//! of screen visits, deep links and logouts shapes the trail.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use trail_location::MemoryLocation;
use trail_nav::{NavConfig, NavigationStack};

mod cli;
mod script;
#[cfg(test)]
mod tests;

use cli::{Cli, Command};
use script::Script;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => NavConfig::load(path)
			.with_context(|| format!("failed to load config {}", path.display()))?,
		None => NavConfig::default(),
	};

	match cli.command {
		Command::Replay { script } => {
			let script = Script::load(&script)?;
			info!(steps = script.steps.len(), "replaying");
			print!("{}", run(&script, config)?);
		}
		Command::CheckConfig { file } => {
			let config = NavConfig::load(&file)
				.with_context(|| format!("failed to load config {}", file.display()))?;
			print!("{}", summarize(&config));
		}
	}

	Ok(())
}

fn run(script: &Script, config: NavConfig) -> anyhow::Result<String> {
	let mut stack = NavigationStack::from_config(MemoryLocation::new(&script.start), config)?;
	script::replay(script, &mut stack)
}

fn summarize(config: &NavConfig) -> String {
	let base_url = config
		.base_url
		.as_ref()
		.map_or("(none)", |url| url.as_str());
	format!(
		"home-path = {}\nhome-title = {}\nbase-url = {}\nmerge-home = {:?}\n",
		config.home_path, config.home_title, base_url, config.merge_home
	)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("trail_nav=trace,trail_location=trace,debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
