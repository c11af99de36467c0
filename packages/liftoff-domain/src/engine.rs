use crate::{LaunchFilter, LaunchRecord, normalize, sort};

/// Normalize, filter, then sort a raw upstream snapshot. Pagination is left to the caller so
/// the prepared sequence can be reused across pages.
pub fn prepare(raw: Vec<LaunchRecord>, filter: &LaunchFilter) -> Vec<LaunchRecord> {
	let mut records = filter.apply(normalize::dedup_by_flight(raw));

	sort::sort_launches(&mut records);

	records
}
