use std::collections::HashSet;

use crate::LaunchRecord;

/// Keeps the first record seen for every flight number, in snapshot order.
pub fn dedup_by_flight(records: Vec<LaunchRecord>) -> Vec<LaunchRecord> {
	let mut seen = HashSet::with_capacity(records.len());

	records.into_iter().filter(|record| seen.insert(record.flight_number)).collect()
}
