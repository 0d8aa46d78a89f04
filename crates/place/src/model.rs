//! Entity shapes the factory builds places from.
//!
//! These mirror the fields of the remote-call results that screen controllers
//! already hold when they navigate, so a controller can hand a fetched result
//! straight to the factory.

use serde::{Deserialize, Serialize};

/// Version coordinates of a package version.
///
/// Only `major` is mandatory; absent components render as `-` in paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionCoordinates {
	pub major: String,
	#[serde(default)]
	pub minor: Option<String>,
	#[serde(default)]
	pub micro: Option<String>,
	#[serde(default)]
	pub pre_release: Option<String>,
	#[serde(default)]
	pub revision: Option<u32>,
}

impl VersionCoordinates {
	pub fn new(major: impl Into<String>) -> Self {
		Self {
			major: major.into(),
			..Self::default()
		}
	}
}

/// Reference to a package by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkgRef {
	pub name: String,
}

/// One version of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkgVersion {
	#[serde(flatten)]
	pub coordinates: VersionCoordinates,
	pub architecture_code: String,
	#[serde(default)]
	pub is_latest: bool,
	/// Owning package, present when the version was fetched on its own.
	#[serde(default)]
	pub pkg: Option<PkgRef>,
}

/// A package with some or all of its versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pkg {
	pub name: String,
	#[serde(default)]
	pub versions: Vec<PkgVersion>,
}

impl Pkg {
	/// The version flagged as latest, otherwise the first one.
	pub fn latest_version(&self) -> Option<&PkgVersion> {
		self.versions
			.iter()
			.find(|v| v.is_latest)
			.or_else(|| self.versions.first())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
	pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySource {
	pub code: String,
	pub repository_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySourceMirror {
	pub code: String,
	pub repository_source_code: String,
	pub repository_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRating {
	pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
	pub guid: String,
}
