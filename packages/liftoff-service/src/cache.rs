//! Per-filter snapshot cache.
//!
//! A paging session begins at offset zero and replaces the entry for its filter; later pages read
//! that entry until it expires, so `total` and ordering stay fixed while the upstream drifts.

use std::{
	collections::HashMap,
	sync::{Arc, Mutex},
	time::Duration,
};

use serde_json::Value;
use tokio::time::Instant;

use liftoff_domain::{LaunchFilter, LaunchRecord};

const SNAPSHOT_CACHE_SCHEMA_VERSION: i32 = 1;

pub type Snapshot = Arc<Vec<LaunchRecord>>;

struct CachedSnapshot {
	records: Snapshot,
	taken_at: Instant,
}

pub struct SnapshotCache {
	ttl: Duration,
	capacity: usize,
	entries: Mutex<HashMap<String, CachedSnapshot>>,
}
impl SnapshotCache {
	pub fn new(ttl: Duration, capacity: usize) -> Self {
		Self { ttl, capacity: capacity.max(1), entries: Mutex::new(HashMap::new()) }
	}

	pub fn enabled(&self) -> bool {
		!self.ttl.is_zero()
	}

	pub fn get(&self, key: &str) -> Option<Snapshot> {
		if !self.enabled() {
			return None;
		}

		let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());
		let fresh = entries.get(key).map(|entry| entry.taken_at.elapsed() < self.ttl)?;

		if !fresh {
			entries.remove(key);

			return None;
		}

		entries.get(key).map(|entry| entry.records.clone())
	}

	pub fn insert(&self, key: String, records: Snapshot) {
		if !self.enabled() {
			return;
		}

		let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		if !entries.contains_key(&key) && entries.len() >= self.capacity {
			let oldest = entries
				.iter()
				.min_by_key(|(_, entry)| entry.taken_at)
				.map(|(oldest, _)| oldest.clone());

			if let Some(oldest) = oldest {
				entries.remove(&oldest);
			}
		}

		entries.insert(key, CachedSnapshot { records, taken_at: Instant::now() });
	}

	pub fn len(&self) -> usize {
		self.entries.lock().unwrap_or_else(|err| err.into_inner()).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

pub fn cache_key(filter: &LaunchFilter) -> String {
	let payload = serde_json::json!({
		"kind": "launch_snapshot",
		"schema_version": SNAPSHOT_CACHE_SCHEMA_VERSION,
		"search": filter.search.to_lowercase(),
		"year": filter.year,
		"status": filter.status,
	});

	hash_cache_key(&payload)
}

fn hash_cache_key(payload: &Value) -> String {
	blake3::hash(payload.to_string().as_bytes()).to_hex().to_string()
}
