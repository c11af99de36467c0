use std::cmp::Ordering;

use time::OffsetDateTime;

use crate::{LaunchRecord, record};

/// Newest year first, then newest launch date first.
///
/// The order is total, and [`sort_launches`] is stable, so records with the same year and date
/// keep their snapshot order.
pub fn compare_launches(a: &LaunchRecord, b: &LaunchRecord) -> Ordering {
	compare_years(&a.launch_year, &b.launch_year)
		.then_with(|| compare_dates(a.launch_date_utc, b.launch_date_utc))
}

pub fn sort_launches(records: &mut [LaunchRecord]) {
	records.sort_by(compare_launches);
}

/// Descending numeric comparison. Years that are not integers sort after every numeric year.
pub fn compare_years(a: &str, b: &str) -> Ordering {
	match (record::parse_year(a), record::parse_year(b)) {
		(Some(left), Some(right)) => right.cmp(&left),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => b.trim().cmp(a.trim()),
	}
}

fn compare_dates(a: Option<OffsetDateTime>, b: Option<OffsetDateTime>) -> Ordering {
	match (a, b) {
		(Some(left), Some(right)) => right.cmp(&left),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}
