use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageWindow {
	pub offset: usize,
	pub limit: usize,
}
impl PageWindow {
	pub fn new(offset: usize, limit: usize) -> Self {
		Self { offset, limit }
	}

	pub fn end(self) -> usize {
		self.offset.saturating_add(self.limit)
	}

	pub fn next(self) -> Self {
		Self { offset: self.end(), limit: self.limit }
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
	pub items: Vec<T>,
	pub has_more: bool,
	/// Length of the full sequence, independent of the window.
	pub total: usize,
}

/// Cuts `[offset, offset + limit)` out of `items`. An offset past the end yields an empty page.
pub fn paginate<T>(items: &[T], window: PageWindow) -> Page<T>
where
	T: Clone,
{
	let total = items.len();
	let start = window.offset.min(total);
	let end = window.end().min(total);

	Page { items: items[start..end].to_vec(), has_more: window.end() < total, total }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn offset_past_end_is_empty() {
		let page = paginate(&[1, 2, 3], PageWindow::new(10, 5));

		assert!(page.items.is_empty());
		assert!(!page.has_more);
		assert_eq!(page.total, 3);
	}

	#[test]
	fn huge_limit_does_not_overflow() {
		let page = paginate(&[1, 2, 3], PageWindow::new(1, usize::MAX));

		assert_eq!(page.items, vec![2, 3]);
		assert!(!page.has_more);
	}
}
