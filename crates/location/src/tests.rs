use pretty_assertions::assert_eq;

use super::*;

#[test]
fn parse_path_only() {
	let loc = Location::parse("/pkg/foo");
	assert_eq!(loc.path, "/pkg/foo");
	assert!(loc.search.is_empty());
}

#[test]
fn parse_decodes_query_and_drops_fragment() {
	let loc = Location::parse("/users?nickname=j%C3%BCrgen&page=2#top");
	assert_eq!(loc.path, "/users");
	assert_eq!(loc.search.get("nickname").map(String::as_str), Some("jürgen"));
	assert_eq!(loc.search.get("page").map(String::as_str), Some("2"));
}

#[test]
fn parse_adds_leading_slash() {
	assert_eq!(Location::parse("about").path, "/about");
	assert_eq!(Location::parse("").path, "/");
}

#[test]
fn to_address_keeps_query_order() {
	let mut loc = Location::new("/repositories");
	loc.search.insert("z".into(), "1".into());
	loc.search.insert("a".into(), "two words".into());
	assert_eq!(loc.to_address(), "/repositories?z=1&a=two+words");
}

#[test]
fn append_search_without_pairs_is_identity() {
	let empty = Search::new();
	assert_eq!(append_search("/about", empty.iter()), "/about");
}

#[test]
fn memory_location_records_requests() {
	let mut bridge = MemoryLocation::default();
	assert_eq!(bridge.current_path(), "/");

	bridge.navigate_to("/pkg/foo");
	bridge.navigate_to("/pkg/foo/changelog?arch=x86_64");

	assert_eq!(bridge.current_path(), "/pkg/foo/changelog");
	assert_eq!(
		bridge.current_location().search.get("arch").map(String::as_str),
		Some("x86_64")
	);
	assert_eq!(bridge.requested(), ["/pkg/foo", "/pkg/foo/changelog?arch=x86_64"]);

	let drained = bridge.take_requested();
	assert_eq!(drained.len(), 2);
	assert!(bridge.requested().is_empty());
	assert_eq!(bridge.current_path(), "/pkg/foo/changelog");
}

#[test]
fn set_displayed_is_not_a_request() {
	let mut bridge = MemoryLocation::new("/");
	bridge.set_displayed("/user/erik?tab=ratings");
	assert_eq!(bridge.current_path(), "/user/erik");
	assert!(bridge.requested().is_empty());
}

#[test]
fn boxed_bridge_delegates() {
	let mut bridge: Box<dyn LocationBridge> = Box::new(MemoryLocation::new("/"));
	bridge.navigate_to("/reports?x=1");
	assert_eq!(bridge.current_path(), "/reports");
	assert_eq!(bridge.current_location().to_address(), "/reports?x=1");
}
