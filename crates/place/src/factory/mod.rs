//! Place constructors for every screen of the application.
//!
//! Each function validates the identifying data it needs and fails with
//! [`PlaceError::InvalidArgument`] when a name, code or token is missing.
//! Nothing here has side effects; two calls with equal input build equal
//! places.
//!
//! Label keys follow the `breadcrumb.<screen>.title` convention of the
//! localization catalogue.


use crate::model::{
	Job, Pkg, PkgVersion, Repository, RepositorySource, RepositorySourceMirror, User, UserRating,
	VersionCoordinates,
};
use crate::{Place, PlaceError, Result};

/// Placeholder for absent version components in package paths.
const ABSENT: &str = "-";

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
	if value.trim().is_empty() {
		return Err(PlaceError::missing(field));
	}
	if value.contains(['/', '?', '#']) {
		return Err(PlaceError::InvalidArgument {
			field,
			reason: "must be a single path segment",
		});
	}
	Ok(value)
}

fn titled(path: impl Into<String>, screen: &str) -> Result<Place> {
	Place::new(path, format!("breadcrumb.{screen}.title"))
}

macro_rules! fixed_places {
	($($(#[$doc:meta])* $name:ident => $path:literal, $screen:literal;)+) => {
		$(
			$(#[$doc])*
			pub fn $name() -> Result<Place> {
				titled($path, $screen)
			}
		)+
	};
}

fixed_places! {
	/// The root of every stack.
	home => "/", "home";
	about => "/about", "about";
	authenticate => "/authenticateuser", "authenticateUser";
	initiate_password_reset => "/initiatepasswordreset", "initiatePasswordReset";
	add_user => "/users/add", "createUser";
	list_users => "/users", "listUsers";
	reports => "/reports", "reports";
	root_operations => "/rootoperations", "rootOperations";
	runtime_information => "/runtimeinformation", "runtimeInformation";
	pkg_feed_builder => "/pkg/feed/builder", "pkgFeedBuilder";
	list_authorization_pkg_rules => "/authorizationpkgrules", "listAuthorizationPkgRules";
	add_authorization_pkg_rule => "/authorizationpkgrules/add", "addAuthorizationPkgRule";
	pkg_category_coverage_import_spreadsheet =>
		"/pkgcategorycoverageimportspreadsheet", "pkgCategoryCoverageImportSpreadsheet";
	pkg_icon_archive_import => "/pkg/iconarchiveimport", "pkgIconArchiveImport";
	pkg_screenshot_archive_import => "/pkg/screenshotarchiveimport", "pkgScreenshotArchiveImport";
	pkg_localization_import => "/pkg/localizationimport", "pkgLocalizationImport";
	list_repositories => "/repositories", "listRepositories";
	add_repository => "/repositories/add", "addRepository";
}

pub fn complete_password_reset(token: &str) -> Result<Place> {
	let token = require("token", token)?;
	titled(format!("/completepasswordreset/{token}"), "completePasswordReset")
}

// users

pub fn view_user(user: &User) -> Result<Place> {
	let nickname = require("nickname", &user.nickname)?;
	Ok(titled(format!("/user/{nickname}"), "viewUser")?.with_display("nickname", nickname))
}

pub fn edit_user(user: &User) -> Result<Place> {
	let nickname = require("nickname", &user.nickname)?;
	titled(format!("/user/{nickname}/edit"), "editUser")
}

pub fn change_password(user: &User) -> Result<Place> {
	let nickname = require("nickname", &user.nickname)?;
	titled(format!("/user/{nickname}/changepassword"), "changePassword")
}

/// Jobs of `owner`, or of everybody when no owner is given.
pub fn list_jobs(owner: Option<&User>) -> Result<Place> {
	match owner {
		Some(user) => {
			let nickname = require("nickname", &user.nickname)?;
			titled(format!("/user/{nickname}/jobs"), "listJobs")
		}
		None => titled("/jobs", "listJobs"),
	}
}

pub fn view_job(job: &Job) -> Result<Place> {
	let guid = require("guid", &job.guid)?;
	titled(format!("/job/{guid}"), "viewJob")
}

// repositories

pub fn view_repository(repository: &Repository) -> Result<Place> {
	let code = require("code", &repository.code)?;
	Ok(titled(format!("/repository/{code}"), "viewRepository")?.with_display("code", code))
}

pub fn edit_repository(repository: &Repository) -> Result<Place> {
	let code = require("code", &repository.code)?;
	Ok(titled(format!("/repository/{code}/edit"), "editRepository")?.with_display("code", code))
}

pub fn add_repository_source(repository: &Repository) -> Result<Place> {
	let code = require("code", &repository.code)?;
	titled(format!("/repository/{code}/sources/add"), "addRepositorySource")
}

fn repository_source_base(source: &RepositorySource) -> Result<String> {
	let repository = require("repositoryCode", &source.repository_code)?;
	let code = require("code", &source.code)?;
	Ok(format!("/repository/{repository}/source/{code}"))
}

pub fn view_repository_source(source: &RepositorySource) -> Result<Place> {
	Ok(titled(repository_source_base(source)?, "viewRepositorySource")?
		.with_display("code", source.code.as_str()))
}

pub fn edit_repository_source(source: &RepositorySource) -> Result<Place> {
	titled(
		format!("{}/edit", repository_source_base(source)?),
		"editRepositorySource",
	)
}

pub fn add_repository_source_mirror(source: &RepositorySource) -> Result<Place> {
	titled(
		format!("{}/mirrors/add", repository_source_base(source)?),
		"addRepositorySourceMirror",
	)
}

fn repository_source_mirror_base(mirror: &RepositorySourceMirror) -> Result<String> {
	let source = repository_source_base(&RepositorySource {
		code: mirror.repository_source_code.clone(),
		repository_code: mirror.repository_code.clone(),
	})?;
	let code = require("code", &mirror.code)?;
	Ok(format!("{source}/mirror/{code}"))
}

pub fn view_repository_source_mirror(mirror: &RepositorySourceMirror) -> Result<Place> {
	Ok(titled(repository_source_mirror_base(mirror)?, "viewRepositorySourceMirror")?
		.with_display("code", mirror.code.as_str()))
}

pub fn edit_repository_source_mirror(mirror: &RepositorySourceMirror) -> Result<Place> {
	titled(
		format!("{}/edit", repository_source_mirror_base(mirror)?),
		"editRepositorySourceMirror",
	)
}

// user ratings

pub fn view_user_rating(rating: &UserRating) -> Result<Place> {
	let code = require("code", &rating.code)?;
	titled(format!("/userrating/{code}"), "viewUserRating")
}

pub fn edit_user_rating(rating: &UserRating) -> Result<Place> {
	let code = require("code", &rating.code)?;
	titled(format!("/userrating/{code}/edit"), "editUserRating")
}

// packages

/// The package overview, independent of version.
pub fn view_pkg(name: &str) -> Result<Place> {
	let name = require("name", name)?;
	Ok(titled(format!("/pkg/{name}"), "viewPkg")?.with_display("pkgName", name))
}

pub fn view_pkg_changelog(name: &str) -> Result<Place> {
	let name = require("name", name)?;
	Ok(titled(format!("/pkg/{name}/changelog"), "viewPkgChangelog")?.with_display("pkgName", name))
}

pub fn edit_pkg_changelog(name: &str) -> Result<Place> {
	let name = require("name", name)?;
	titled(format!("/pkg/{name}/changelog/edit"), "editPkgChangelog")
}

pub fn edit_pkg_localization(name: &str) -> Result<Place> {
	let name = require("name", name)?;
	titled(format!("/pkg/{name}/editlocalizations"), "editPkgLocalizations")
}

pub fn list_pkg_versions_for_pkg(name: &str) -> Result<Place> {
	let name = require("name", name)?;
	titled(format!("/pkg/{name}/listpkgversions"), "listPkgVersionsForPkg")
}

/// Base path shared by every screen about one package version:
/// `/pkg/{name}/{major}/{minor}/{micro}/{preRelease}/{revision}/{arch}`.
fn pkg_version_base(name: &str, coordinates: &VersionCoordinates, architecture: &str) -> Result<String> {
	let name = require("name", name)?;
	let major = require("major", &coordinates.major)?;
	let architecture = require("architectureCode", architecture)?;

	let optional = |value: &Option<String>, field: &'static str| match value.as_deref() {
		Some(v) if !v.is_empty() => require(field, v).map(str::to_string),
		_ => Ok(ABSENT.to_string()),
	};
	let minor = optional(&coordinates.minor, "minor")?;
	let micro = optional(&coordinates.micro, "micro")?;
	let pre_release = optional(&coordinates.pre_release, "preRelease")?;
	let revision = coordinates
		.revision
		.map_or_else(|| ABSENT.to_string(), |r| r.to_string());

	Ok(format!(
		"/pkg/{name}/{major}/{minor}/{micro}/{pre_release}/{revision}/{architecture}"
	))
}

/// A specific version of a package.
pub fn view_pkg_version(name: &str, coordinates: &VersionCoordinates, architecture: &str) -> Result<Place> {
	Ok(titled(pkg_version_base(name, coordinates, architecture)?, "viewPkg")?.with_display("pkgName", name))
}

/// A specific version given a version result that names its package.
pub fn view_pkg_version_from_version(version: &PkgVersion) -> Result<Place> {
	let pkg = version.pkg.as_ref().ok_or(PlaceError::missing("pkg"))?;
	view_pkg_version(&pkg.name, &version.coordinates, &version.architecture_code)
}

/// The latest (or only) version of `pkg`.
pub fn view_pkg_version_from_pkg(pkg: &Pkg) -> Result<Place> {
	let version = pkg.latest_version().ok_or(PlaceError::missing("versions"))?;
	view_pkg_version(&pkg.name, &version.coordinates, &version.architecture_code)
}

/// A screen manipulating `pkg`, rooted at its latest version.
fn manipulate_pkg(pkg: &Pkg, suffix: &str, screen: &str) -> Result<Place> {
	let version = pkg.latest_version().ok_or(PlaceError::missing("versions"))?;
	let base = pkg_version_base(&pkg.name, &version.coordinates, &version.architecture_code)?;
	titled(format!("{base}/{suffix}"), screen)
}

pub fn edit_pkg_categories(pkg: &Pkg) -> Result<Place> {
	manipulate_pkg(pkg, "editcategories", "editPkgCategories")
}

pub fn edit_pkg_prominence(pkg: &Pkg) -> Result<Place> {
	manipulate_pkg(pkg, "editprominence", "editPkgProminence")
}

pub fn edit_pkg_icon(pkg: &Pkg) -> Result<Place> {
	manipulate_pkg(pkg, "editicon", "editPkgIcon")
}

pub fn edit_pkg_screenshots(pkg: &Pkg) -> Result<Place> {
	manipulate_pkg(pkg, "editscreenshots", "editPkgScreenshots")
}

pub fn view_pkg_version_localizations(pkg: &Pkg) -> Result<Place> {
	manipulate_pkg(pkg, "viewversionlocalizations", "viewPkgVersionLocalizations")
}

pub fn edit_pkg_version_localizations(pkg: &Pkg) -> Result<Place> {
	manipulate_pkg(pkg, "editversionlocalizations", "editPkgVersionLocalizations")
}

pub fn add_user_rating(pkg: &Pkg) -> Result<Place> {
	manipulate_pkg(pkg, "adduserrating", "addUserRating")
}
