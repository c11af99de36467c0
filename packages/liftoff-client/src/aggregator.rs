use std::collections::HashSet;

use liftoff_domain::LaunchRecord;

/// Running collection assembled from successive pages of one filter query.
#[derive(Debug, Clone)]
pub struct Aggregator {
	collection: Vec<LaunchRecord>,
	seen: HashSet<i64>,
	cursor: usize,
	has_more: bool,
}
impl Aggregator {
	pub fn new() -> Self {
		Self { collection: Vec::new(), seen: HashSet::new(), cursor: 0, has_more: true }
	}

	pub fn reset(&mut self) {
		self.collection.clear();
		self.seen.clear();
		self.cursor = 0;
		self.has_more = true;
	}

	/// Appends the records not already collected and returns how many were added.
	///
	/// The cursor advances by `requested_limit`, not by the number of survivors, so suppressed
	/// duplicates do not shift the next offset.
	pub fn merge(
		&mut self,
		page: Vec<LaunchRecord>,
		requested_limit: usize,
		has_more: bool,
	) -> usize {
		let before = self.collection.len();

		for record in page {
			if self.seen.insert(record.flight_number) {
				self.collection.push(record);
			}
		}

		self.cursor = self.cursor.saturating_add(requested_limit);
		self.has_more = has_more;

		self.collection.len() - before
	}

	pub fn collection(&self) -> &[LaunchRecord] {
		&self.collection
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn has_more(&self) -> bool {
		self.has_more
	}
}
impl Default for Aggregator {
	fn default() -> Self {
		Self::new()
	}
}
