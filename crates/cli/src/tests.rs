use std::io::Write;

use pretty_assertions::assert_eq;
use trail_nav::{HomePolicy, NavConfig};

use super::script::{Script, Step};
use super::{run, summarize};

#[test]
fn parses_every_step_kind() {
	let script = Script::parse(
		r#"
		start = "/about"

		[[step]]
		op = "push"
		path = "/pkg/foo"
		title = "breadcrumb.viewPkg.title"
		display = { name = "foo" }

		[[step]]
		op = "pop"

		[[step]]
		op = "drop"

		[[step]]
		op = "pop-to"
		index = 0

		[[step]]
		op = "reset"

		[[step]]
		op = "logout"

		[[step]]
		op = "merge"
		places = [{ path = "/" }, { path = "/pkg/foo", search = { q = "x" } }]

		[[step]]
		op = "peek"

		[[step]]
		op = "visit"
		address = "/pkg/foo?q=y"

		[[step]]
		op = "share"
		index = 1
		"#,
	)
	.unwrap();

	assert_eq!(script.start, "/about");
	assert_eq!(script.steps.len(), 10);
	match &script.steps[0] {
		Step::Push(spec) => {
			assert_eq!(spec.path, "/pkg/foo");
			assert_eq!(spec.display["name"], "foo");
		}
		other => panic!("expected push, got {other:?}"),
	}
	assert!(matches!(script.steps[3], Step::PopTo { index: 0 }));
	assert!(matches!(&script.steps[4], Step::Reset { places } if places.is_empty()));
}

#[test]
fn rejects_unknown_ops() {
	assert!(Script::parse("[[step]]\nop = \"teleport\"").is_err());
}

#[test]
fn replay_reports_trail_and_navigation() {
	let script = Script::parse(
		r#"
		[[step]]
		op = "push"
		path = "/pkg/foo"
		title = "breadcrumb.viewPkg.title"

		[[step]]
		op = "push"
		path = "/pkg/foo/changelog"
		title = "breadcrumb.viewPkgChangelog.title"

		[[step]]
		op = "pop"
		"#,
	)
	.unwrap();

	let report = run(&script, NavConfig::default()).unwrap();
	let expected = "\
step 1: push /pkg/foo
  0 / [breadcrumb.home.title]
> 1 /pkg/foo [breadcrumb.viewPkg.title]
  navigate /pkg/foo
  at /pkg/foo
step 2: push /pkg/foo/changelog
  0 / [breadcrumb.home.title]
  1 /pkg/foo [breadcrumb.viewPkg.title]
> 2 /pkg/foo/changelog [breadcrumb.viewPkgChangelog.title]
  navigate /pkg/foo/changelog
  at /pkg/foo/changelog
step 3: pop
  0 / [breadcrumb.home.title]
> 1 /pkg/foo [breadcrumb.viewPkg.title]
  navigate /pkg/foo
  at /pkg/foo
";
	assert_eq!(report, expected);
}

#[test]
fn rejected_merge_is_reported_and_run_continues() {
	let script = Script::parse(
		r#"
		[[step]]
		op = "merge"
		places = [{ path = "/elsewhere" }]

		[[step]]
		op = "peek"
		"#,
	)
	.unwrap();
	let config = NavConfig {
		merge_home: HomePolicy::Reject,
		..NavConfig::default()
	};

	let report = run(&script, config).unwrap();
	assert!(report.contains("rejected:"), "{report}");
	assert!(report.contains("  top /\n"), "{report}");
}

#[test]
fn share_uses_configured_base_url() {
	let script = Script::parse(
		r#"
		[[step]]
		op = "push"
		path = "/pkg/foo"

		[[step]]
		op = "share"
		index = 1
		"#,
	)
	.unwrap();
	let config = NavConfig::parse(r#"base-url = "https://depot.example.org/""#).unwrap();

	let report = run(&script, config).unwrap();
	assert!(report.contains("  link https://depot.example.org/pkg/foo\n"), "{report}");
}

#[test]
fn out_of_range_index_aborts() {
	let script = Script::parse("[[step]]\nop = \"pop-to\"\nindex = 4").unwrap();
	let err = run(&script, NavConfig::default()).unwrap_err();
	assert!(err.to_string().contains("index 4"), "{err}");
}

#[test]
fn script_load_reports_path() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[[step]]\nop = \"peek\"").unwrap();
	assert_eq!(Script::load(file.path()).unwrap().steps.len(), 1);

	let missing = file.path().with_extension("missing");
	let err = Script::load(&missing).unwrap_err();
	assert!(err.to_string().contains("failed to read script"), "{err}");
}

#[test]
fn summary_lists_resolved_values() {
	let summary = summarize(&NavConfig::default());
	assert_eq!(
		summary,
		"home-path = /\nhome-title = breadcrumb.home.title\nbase-url = (none)\nmerge-home = Adopt\n"
	);
}

#[test]
fn replay_starts_at_script_address() {
	let script = Script::parse(
		r#"
		start = "/pkg/foo?tab=log"

		[[step]]
		op = "merge"
		places = [{ path = "/" }, { path = "/pkg/foo" }]
		"#,
	)
	.unwrap();

	let report = run(&script, NavConfig::default()).unwrap();
	let expected = "\
step 1: merge (2 places)
  0 / [breadcrumb.home.title]
> 1 /pkg/foo?tab=log [breadcrumb.untitled.title]
  at /pkg/foo
";
	assert_eq!(report, expected);
}
