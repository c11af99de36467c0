use crate::{Aggregator, FetchEvent, FetchStatus, LaunchesApi, PageBody, Result};
use liftoff_domain::{LaunchFilter, LaunchRecord, PageWindow, YearGroup, projection};

/// Identity of one outgoing page request.
///
/// A response is only applied while its generation and offset still match the session, so a
/// slow page from an earlier filter can never land in the current collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
	pub generation: u64,
	pub filters: LaunchFilter,
	pub window: PageWindow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
	Merged { added: usize },
	/// The response belonged to a superseded request and was dropped.
	Stale,
	Failed,
}

/// Client view of one browsing session: the active filters, the collection assembled so far,
/// and the fetch state that gates further page loads.
#[derive(Debug, Clone)]
pub struct Session {
	filters: LaunchFilter,
	page_size: usize,
	aggregator: Aggregator,
	status: FetchStatus,
	generation: u64,
}
impl Session {
	pub fn new(page_size: usize) -> Self {
		Self {
			filters: LaunchFilter::default(),
			page_size: page_size.max(1),
			aggregator: Aggregator::new(),
			status: FetchStatus::Idle,
			generation: 0,
		}
	}

	/// Resets the collection and issues the first page for the current filters.
	pub fn start(&mut self) -> PageRequest {
		self.generation += 1;
		self.aggregator.reset();
		self.transition(FetchEvent::FilterChanged);

		self.request(0)
	}

	/// Returns `None` when `filters` equal the active ones.
	pub fn set_filters(&mut self, filters: LaunchFilter) -> Option<PageRequest> {
		if filters == self.filters {
			return None;
		}

		tracing::debug!(?filters, "Filters changed; restarting session.");

		self.filters = filters;

		Some(self.start())
	}

	pub fn set_search(&mut self, search: &str) -> Option<PageRequest> {
		let filters = LaunchFilter { search: search.to_string(), ..self.filters.clone() };

		self.set_filters(filters)
	}

	pub fn clear_filters(&mut self) -> Option<PageRequest> {
		self.set_filters(LaunchFilter::default())
	}

	/// The infinite-scroll trigger. A no-op unless the session is idle with more pages left.
	pub fn near_bottom(&mut self) -> Option<PageRequest> {
		let event = FetchEvent::NearBottom { has_more: self.aggregator.has_more() };
		let next = self.status.on(event)?;

		self.status = next;

		Some(self.request(self.aggregator.cursor()))
	}

	/// Folds the outcome of `request` into the session.
	pub fn complete(&mut self, request: &PageRequest, outcome: Result<PageBody>) -> Applied {
		if !self.is_current(request) {
			tracing::debug!(
				generation = request.generation,
				offset = request.window.offset,
				"Dropped stale page response."
			);

			return Applied::Stale;
		}

		match outcome {
			Ok(body) => {
				let (launches, has_more) = match body.launches {
					Some(launches) => (launches, body.has_more),
					None => {
						tracing::warn!(
							offset = request.window.offset,
							"Page response is missing the launches array; treating it as empty."
						);

						(Vec::new(), false)
					},
				};
				let added = self.aggregator.merge(launches, request.window.limit, has_more);

				self.transition(FetchEvent::Succeeded { has_more });

				Applied::Merged { added }
			},
			Err(err) => {
				tracing::error!(
					error = %err,
					offset = request.window.offset,
					"Failed to load launches."
				);

				self.transition(FetchEvent::Failed);

				Applied::Failed
			},
		}
	}

	/// Sends `request` through `api` and applies the response.
	pub async fn load(&mut self, api: &dyn LaunchesApi, request: PageRequest) -> Applied {
		let outcome = api.fetch_page(&request.filters, request.window).await;

		self.complete(&request, outcome)
	}

	pub fn filters(&self) -> &LaunchFilter {
		&self.filters
	}

	pub fn status(&self) -> FetchStatus {
		self.status
	}

	pub fn collection(&self) -> &[LaunchRecord] {
		self.aggregator.collection()
	}

	pub fn cursor(&self) -> usize {
		self.aggregator.cursor()
	}

	pub fn has_more(&self) -> bool {
		self.aggregator.has_more()
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn year_groups(&self) -> Vec<YearGroup> {
		projection::group_by_year(self.aggregator.collection())
	}

	fn request(&self, offset: usize) -> PageRequest {
		PageRequest {
			generation: self.generation,
			filters: self.filters.clone(),
			window: PageWindow::new(offset, self.page_size),
		}
	}

	fn is_current(&self, request: &PageRequest) -> bool {
		request.generation == self.generation
			&& request.window.offset == self.aggregator.cursor()
			&& self.status.is_loading()
	}

	fn transition(&mut self, event: FetchEvent) {
		if let Some(next) = self.status.on(event) {
			self.status = next;
		}
	}
}
impl Default for Session {
	fn default() -> Self {
		Self::new(crate::DEFAULT_PAGE_SIZE)
	}
}
