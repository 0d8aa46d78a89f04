//! Address rendering and location tagging.

use trail_location::{Location, Search, append_search};
use url::Url;

use crate::{Place, Result};

/// Renders the address a link to `place` should carry.
///
/// The place's own query parameters come first, followed by `extra`; a key
/// present in both takes its value from `extra`. Output depends only on the
/// inputs, so repeated calls agree.
pub fn to_full_path(place: &Place, extra: Option<&Search>) -> String {
	match extra {
		Some(extra) if !extra.is_empty() => {
			let mut merged = place.search.clone();
			merged.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
			append_search(&place.path, merged.iter())
		}
		_ => append_search(&place.path, place.search.iter()),
	}
}

/// Renders an absolute, shareable URL for `place` under `base`.
///
/// `base` is typically the application origin, e.g. `https://depot.example.org`.
pub fn to_shareable_url(base: &Url, place: &Place, extra: Option<&Search>) -> Result<Url> {
	Ok(base.join(&to_full_path(place, extra))?)
}

/// Tags `place` as the presently displayed location.
///
/// Query parameters of the displayed address are blended into the place's
/// own so they survive when the user later returns through the breadcrumb.
/// The path is left alone.
pub fn apply_current_location(place: &Place, location: &Location) -> Place {
	let mut tagged = place.tagged_current(true);
	tagged
		.search
		.extend(location.search.iter().map(|(k, v)| (k.clone(), v.clone())));
	tagged
}

/// Returns `place` with `search` blended into its query parameters.
pub fn apply_search(place: &Place, search: &Search) -> Place {
	let mut place = place.clone();
	place
		.search
		.extend(search.iter().map(|(k, v)| (k.clone(), v.clone())));
	place
}
