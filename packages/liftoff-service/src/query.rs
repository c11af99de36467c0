use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Error, LaunchService, Result, cache};
use liftoff_config::Query;
use liftoff_domain::{
	LaunchFilter, LaunchRecord, PageWindow, engine,
	paginate::{self, Page},
};

/// Raw query-string form. Everything is optional text so that validation errors can be
/// reported in the service's own error shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryRequest {
	pub search: Option<String>,
	pub year: Option<String>,
	pub status: Option<String>,
	pub offset: Option<String>,
	pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
	pub filter: LaunchFilter,
	pub window: PageWindow,
}
impl QueryParameters {
	pub fn parse(req: &QueryRequest, cfg: &Query) -> Result<Self> {
		let filter = LaunchFilter::parse(
			req.search.as_deref(),
			req.year.as_deref(),
			req.status.as_deref(),
		)?;
		let offset = parse_count("offset", req.offset.as_deref())?.unwrap_or(0);
		let limit =
			parse_count("limit", req.limit.as_deref())?.unwrap_or(cfg.default_limit as usize);

		if limit == 0 {
			return Err(Error::InvalidRequest {
				message: "limit must be greater than zero.".to_string(),
			});
		}
		if limit > cfg.max_limit as usize {
			return Err(Error::InvalidRequest {
				message: format!("limit must not exceed {}.", cfg.max_limit),
			});
		}

		Ok(Self { filter, window: PageWindow::new(offset, limit) })
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
	pub launches: Vec<LaunchRecord>,
	#[serde(rename = "hasMore")]
	pub has_more: bool,
	pub total: usize,
}
impl From<Page<LaunchRecord>> for QueryResponse {
	fn from(page: Page<LaunchRecord>) -> Self {
		Self { launches: page.items, has_more: page.has_more, total: page.total }
	}
}

impl LaunchService {
	pub async fn query(&self, req: QueryRequest) -> Result<QueryResponse> {
		let params = QueryParameters::parse(&req, &self.cfg.query)?;

		self.query_with(&params).await
	}

	/// Offset zero always re-reads the upstream and starts a new paging session for the filter.
	pub async fn query_with(&self, params: &QueryParameters) -> Result<QueryResponse> {
		let key = cache::cache_key(&params.filter);
		let cached = if params.window.offset > 0 { self.cache.get(&key) } else { None };
		let cache_hit = cached.is_some();
		let records = match cached {
			Some(records) => records,
			None => {
				let raw = self.fetch_snapshot().await?;
				let prepared = Arc::new(engine::prepare(raw, &params.filter));

				self.cache.insert(key, prepared.clone());

				prepared
			},
		};
		let page = paginate::paginate(&records, params.window);

		tracing::info!(
			offset = params.window.offset,
			limit = params.window.limit,
			total = page.total,
			has_more = page.has_more,
			cache_hit,
			"Served launch page."
		);

		Ok(page.into())
	}
}

fn parse_count(label: &str, raw: Option<&str>) -> Result<Option<usize>> {
	let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
		return Ok(None);
	};

	value.parse().map(Some).map_err(|_| Error::InvalidRequest {
		message: format!("{label} must be a non-negative integer."),
	})
}
