use std::collections::HashMap;

use serde::Serialize;

use crate::{LaunchRecord, sort};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearGroup {
	pub year: String,
	pub launches: Vec<LaunchRecord>,
}

/// Groups records by year, newest year first. Each group keeps the order of `records`.
pub fn group_by_year(records: &[LaunchRecord]) -> Vec<YearGroup> {
	let mut index = HashMap::new();
	let mut groups: Vec<YearGroup> = Vec::new();

	for record in records {
		let year = record.launch_year.trim();
		let slot = *index.entry(year.to_string()).or_insert_with(|| {
			groups.push(YearGroup { year: year.to_string(), launches: Vec::new() });

			groups.len() - 1
		});

		groups[slot].launches.push(record.clone());
	}

	groups.sort_by(|a, b| sort::compare_years(&a.year, &b.year));

	groups
}

/// Distinct years present in `records`, newest first.
pub fn distinct_years(records: &[LaunchRecord]) -> Vec<String> {
	let mut years: Vec<String> = Vec::new();

	for record in records {
		let year = record.launch_year.trim();

		if !years.iter().any(|known| known == year) {
			years.push(year.to_string());
		}
	}

	years.sort_by(|a, b| sort::compare_years(a, b));

	years
}
