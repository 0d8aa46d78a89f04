use pretty_assertions::assert_eq;
use proptest::prelude::*;
use url::Url;

use super::*;

fn search(pairs: &[(&str, &str)]) -> Search {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

#[test]
fn new_rejects_relative_paths() {
	assert_eq!(
		Place::new("pkg/foo", "t").unwrap_err(),
		PlaceError::InvalidPath("pkg/foo".into())
	);
	assert!(Place::new("", "t").is_err());
}

#[test]
fn identity_ignores_display_and_search() {
	let a = Place::new("/pkg/foo", "a").unwrap().with_display("pkgName", "foo");
	let b = Place::new("/pkg/foo", "b").unwrap().with_search("arch", "x86");
	assert!(a.same_path(&b));
	assert_ne!(a, b);
}

#[test]
fn full_path_without_search_is_the_path() {
	let place = factory::view_pkg("foo").unwrap();
	assert_eq!(to_full_path(&place, None), "/pkg/foo");
	assert_eq!(to_full_path(&place, Some(&Search::new())), "/pkg/foo");
}

#[test]
fn full_path_merges_extra_search() {
	let place = Place::new("/pkg/foo", "t")
		.unwrap()
		.with_search("arch", "x86")
		.with_search("tab", "about");
	let extra = search(&[("arch", "x86_64"), ("banner", "false")]);
	assert_eq!(
		to_full_path(&place, Some(&extra)),
		"/pkg/foo?arch=x86_64&tab=about&banner=false"
	);
}

#[test]
fn shareable_url_joins_base() {
	let base = Url::parse("https://depot.example.org/").unwrap();
	let place = factory::view_pkg_changelog("foo").unwrap();
	let url = to_shareable_url(&base, &place, Some(&search(&[("breadcrumbs", "false")]))).unwrap();
	assert_eq!(
		url.as_str(),
		"https://depot.example.org/pkg/foo/changelog?breadcrumbs=false"
	);
}

#[test]
fn apply_current_location_tags_without_touching_input() {
	let place = factory::list_users().unwrap().with_search("page", "1");
	let location = Location::parse("/users?page=3&q=er");

	let tagged = apply_current_location(&place, &location);

	assert!(tagged.is_current());
	assert_eq!(tagged.path(), "/users");
	assert_eq!(tagged.search(), &search(&[("page", "3"), ("q", "er")]));
	assert!(!place.is_current());
	assert_eq!(place.search(), &search(&[("page", "1")]));
}

#[test]
fn apply_search_blends() {
	let place = factory::authenticate().unwrap();
	let with = apply_search(&place, &search(&[("nickname", "erik")]));
	assert_eq!(to_full_path(&with, None), "/authenticateuser?nickname=erik");
	assert!(place.search().is_empty());
}

#[test]
fn serializes_camel_case() {
	let place = factory::view_pkg("foo").unwrap();
	let json = serde_json::to_value(&place).unwrap();
	assert_eq!(json["titleKey"], "breadcrumb.viewPkg.title");
	assert_eq!(json["display"]["pkgName"], "foo");
	assert!(json.get("search").is_none());
}

proptest! {
	#[test]
	fn full_path_is_stable(
		segments in prop::collection::vec("[a-z0-9_]{1,8}", 1..4),
		pairs in prop::collection::vec(("[a-z]{1,4}", "[ -~]{0,6}"), 0..4),
	) {
		let mut place = Place::new(format!("/{}", segments.join("/")), "t").unwrap();
		for (k, v) in &pairs {
			place = place.with_search(k.as_str(), v.as_str());
		}

		let first = to_full_path(&place, None);
		prop_assert_eq!(&first, &to_full_path(&place, None));

		let reparsed = Location::parse(&first);
		prop_assert_eq!(reparsed.path.as_str(), place.path());
		prop_assert_eq!(&reparsed.search, place.search());
	}
}
