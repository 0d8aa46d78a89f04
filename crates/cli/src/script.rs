//! Navigation scripts.
//!
//! A script is a TOML file holding an ordered list of steps:
//!
//! ```toml
//! [[step]]
//! op = "push"
//! path = "/pkg/foo"
//! title = "breadcrumb.viewPkg.title"
//! display = { name = "foo" }
//!
//! [[step]]
//! op = "pop-to"
//! index = 0
//! ```

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, bail};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;
use trail_location::{LocationBridge, MemoryLocation};
use trail_nav::{NavError, NavigationStack, PlaceHandle};
use trail_place::{Place, to_full_path};

const DEFAULT_TITLE: &str = "breadcrumb.untitled.title";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
	/// Address shown in the location bar before the first step.
	#[serde(default = "root_address")]
	pub start: String,
	#[serde(default, rename = "step")]
	pub steps: Vec<Step>,
}

fn root_address() -> String {
	"/".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Step {
	Push(PlaceSpec),
	Pop,
	/// Pops without requesting navigation.
	Drop,
	PopTo {
		index: usize,
	},
	Reset {
		#[serde(default)]
		places: Vec<PlaceSpec>,
	},
	Logout,
	Merge {
		places: Vec<PlaceSpec>,
	},
	Peek,
	/// Changes the displayed address as if the user followed a link.
	Visit {
		address: String,
	},
	Share {
		index: usize,
	},
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceSpec {
	pub path: String,
	pub title: Option<String>,
	#[serde(default)]
	pub display: IndexMap<String, String>,
	#[serde(default)]
	pub search: IndexMap<String, String>,
}

impl PlaceSpec {
	fn to_place(&self) -> anyhow::Result<Place> {
		let title = self.title.as_deref().unwrap_or(DEFAULT_TITLE);
		let place = Place::new(self.path.as_str(), title)
			.with_context(|| format!("invalid place {:?}", self.path))?;
		let place = self
			.display
			.iter()
			.fold(place, |place, (key, value)| place.with_display(key, value));
		Ok(self
			.search
			.iter()
			.fold(place, |place, (key, value)| place.with_search(key, value)))
	}
}

fn to_places(specs: &[PlaceSpec]) -> anyhow::Result<Vec<Place>> {
	specs.iter().map(PlaceSpec::to_place).collect()
}

impl Script {
	pub fn parse(input: &str) -> anyhow::Result<Self> {
		Ok(toml::from_str(input)?)
	}

	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read script {}", path.display()))?;
		Self::parse(&content).with_context(|| format!("failed to parse script {}", path.display()))
	}
}

/// Runs every step and returns the printed report.
///
/// The stack's location is expected to display [`Script::start`] already.
/// Rejected merges are reported and the run continues. Malformed places and
/// out-of-range indices abort the run.
pub fn replay(script: &Script, stack: &mut NavigationStack<MemoryLocation>) -> anyhow::Result<String> {
	let mut out = String::new();

	for (n, step) in script.steps.iter().enumerate() {
		debug!(step = n + 1, ?step, "replay");
		let _ = writeln!(out, "step {}: {}", n + 1, describe(step));

		match step {
			Step::Push(spec) => {
				stack.push_and_navigate(spec.to_place()?);
			}
			Step::Pop => {
				if !stack.pop_and_navigate() {
					let _ = writeln!(out, "  (at home)");
				}
			}
			Step::Drop => {
				if stack.pop().is_none() {
					let _ = writeln!(out, "  (at home)");
				}
			}
			Step::PopTo { index } => {
				let handle = handle_at(stack, *index)?;
				stack.pop_to_and_navigate(handle)?;
			}
			Step::Reset { places } => stack.reset_and_navigate(to_places(places)?),
			Step::Logout => stack.reset(),
			Step::Merge { places } => match stack.merge_complete_stack(to_places(places)?) {
				Ok(()) => {}
				Err(err @ NavError::HomeMismatch { .. }) => {
					let _ = writeln!(out, "  rejected: {err}");
				}
				Err(err) => return Err(err.into()),
			},
			Step::Peek => {
				let _ = writeln!(out, "  top {}", to_full_path(stack.peek(), None));
			}
			Step::Visit { address } => stack.location_mut().set_displayed(address),
			Step::Share { index } => {
				let handle = handle_at(stack, *index)?;
				match stack.shareable_url(handle)? {
					Some(url) => {
						let _ = writeln!(out, "  link {url}");
					}
					None => {
						let _ = writeln!(out, "  (no base-url configured)");
					}
				}
			}
		}

		render(&mut out, stack);
	}

	Ok(out)
}

fn handle_at(stack: &NavigationStack<MemoryLocation>, index: usize) -> anyhow::Result<PlaceHandle> {
	match stack.stack().get(index) {
		Some(crumb) => Ok(crumb.handle),
		None => bail!("index {index} is past the end of a {}-entry trail", stack.len()),
	}
}

fn describe(step: &Step) -> String {
	match step {
		Step::Push(spec) => format!("push {}", spec.path),
		Step::Pop => "pop".to_string(),
		Step::Drop => "drop".to_string(),
		Step::PopTo { index } => format!("pop-to {index}"),
		Step::Reset { places } if places.is_empty() => "reset".to_string(),
		Step::Reset { places } => format!("reset ({} places)", places.len()),
		Step::Logout => "logout".to_string(),
		Step::Merge { places } => format!("merge ({} places)", places.len()),
		Step::Peek => "peek".to_string(),
		Step::Visit { address } => format!("visit {address}"),
		Step::Share { index } => format!("share {index}"),
	}
}

/// Prints the trail with the active entry marked, then any addresses the
/// stack asked the location bar to show.
fn render(out: &mut String, stack: &mut NavigationStack<MemoryLocation>) {
	for (index, crumb) in stack.stack().iter().enumerate() {
		let marker = if stack.is_active(crumb.handle) { '>' } else { ' ' };
		let _ = writeln!(
			out,
			"{marker} {index} {} [{}]",
			to_full_path(&crumb.place, None),
			crumb.place.title_key()
		);
	}
	for address in stack.location_mut().take_requested() {
		let _ = writeln!(out, "  navigate {address}");
	}
	let _ = writeln!(out, "  at {}", stack.location().current_path());
}
