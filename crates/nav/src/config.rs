//! Stack configuration.
//!
//! Configuration is written in TOML. Every key is optional:
//!
//! ```toml
//! # Path and label key of the root breadcrumb.
//! home-path = "/"
//! home-title = "breadcrumb.home.title"
//!
//! # Origin used when rendering shareable links.
//! base-url = "https://depot.example.org/"
//!
//! # What a merge does when it proposes a different home: "adopt" or "reject".
//! merge-home = "adopt"
//! ```

use std::path::Path;

use serde::Deserialize;
use trail_place::Place;
use url::Url;

use crate::error::ConfigError;

/// How [`merge_complete_stack`](crate::NavigationStack::merge_complete_stack)
/// treats a proposal whose first element differs from the current home.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HomePolicy {
	/// Accept the proposal; nothing of the old stack is kept.
	#[default]
	Adopt,
	/// Refuse the merge and leave the stack untouched.
	Reject,
}

/// Parsed stack configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct NavConfig {
	pub home_path: String,
	pub home_title: String,
	pub base_url: Option<Url>,
	pub merge_home: HomePolicy,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			home_path: "/".to_string(),
			home_title: "breadcrumb.home.title".to_string(),
			base_url: None,
			merge_home: HomePolicy::default(),
		}
	}
}

impl NavConfig {
	/// Parse a TOML string into a [`NavConfig`].
	///
	/// The home place is validated here so that a stack built from the
	/// result can always re-seed itself.
	pub fn parse(input: &str) -> Result<Self, ConfigError> {
		let config: NavConfig = toml::from_str(input)?;
		config.home()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Builds the configured home place.
	pub fn home(&self) -> trail_place::Result<Place> {
		Place::new(self.home_path.as_str(), self.home_title.as_str())
	}
}
