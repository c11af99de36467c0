use std::{
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
	time::Duration,
};

use tokio::time::{self, Instant};

/// Coalesces bursts of input into one trigger after a quiet period.
///
/// Every [`Debouncer::schedule`] call invalidates all tokens handed out before it, so only the
/// most recent one fires.
#[derive(Debug, Clone)]
pub struct Debouncer {
	delay: Duration,
	latest: Arc<AtomicU64>,
}
impl Debouncer {
	pub fn new(delay: Duration) -> Self {
		Self { delay, latest: Arc::new(AtomicU64::new(0)) }
	}

	pub fn schedule(&self) -> DebounceToken {
		let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

		DebounceToken { id, latest: self.latest.clone(), deadline: Instant::now() + self.delay }
	}

	/// Invalidates every outstanding token.
	pub fn cancel(&self) {
		self.latest.fetch_add(1, Ordering::SeqCst);
	}
}

#[derive(Debug)]
pub struct DebounceToken {
	id: u64,
	latest: Arc<AtomicU64>,
	deadline: Instant,
}
impl DebounceToken {
	pub fn is_current(&self) -> bool {
		self.latest.load(Ordering::SeqCst) == self.id
	}

	pub fn deadline(&self) -> Instant {
		self.deadline
	}

	/// Waits out the quiet period. Returns `false` if a newer token was scheduled meanwhile.
	pub async fn fire(self) -> bool {
		time::sleep_until(self.deadline).await;

		self.is_current()
	}
}
