use std::{future::Future, pin::Pin, time::Duration as StdDuration};

use reqwest::{Client, Response};
use serde_json::Value;

use crate::{Error, Result};
use liftoff_domain::{LaunchFilter, LaunchRecord, PageWindow};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One page as received from the query endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBody {
	/// `None` when the body did not carry a usable `launches` array.
	pub launches: Option<Vec<LaunchRecord>>,
	pub has_more: bool,
	pub total: Option<usize>,
}
impl PageBody {
	pub fn new(launches: Vec<LaunchRecord>, has_more: bool, total: usize) -> Self {
		Self { launches: Some(launches), has_more, total: Some(total) }
	}

	pub fn from_value(value: &Value) -> Self {
		let launches = value
			.get("launches")
			.filter(|launches| launches.is_array())
			.and_then(|launches| serde_json::from_value(launches.clone()).ok());
		let has_more = value.get("hasMore").and_then(Value::as_bool).unwrap_or(false);
		let total = value.get("total").and_then(Value::as_u64).map(|total| total as usize);

		Self { launches, has_more, total }
	}
}

pub trait LaunchesApi
where
	Self: Send + Sync,
{
	fn fetch_page<'a>(
		&'a self,
		filter: &'a LaunchFilter,
		window: PageWindow,
	) -> BoxFuture<'a, Result<PageBody>>;

	fn fetch_years<'a>(&'a self) -> BoxFuture<'a, Result<Vec<String>>>;
}

/// Talks to a running launch query service.
pub struct HttpLaunchesApi {
	client: Client,
	api_base: String,
}
impl HttpLaunchesApi {
	pub fn new(api_base: &str, timeout_ms: u64) -> Result<Self> {
		let client = Client::builder().timeout(StdDuration::from_millis(timeout_ms)).build()?;

		Ok(Self { client, api_base: api_base.trim_end_matches('/').to_string() })
	}

	async fn page(&self, filter: &LaunchFilter, window: PageWindow) -> Result<PageBody> {
		let url = format!("{}/launches", self.api_base);
		let res = self.client.get(&url).query(&page_query(filter, window)).send().await?;
		let json = read_json(res).await?;

		Ok(PageBody::from_value(&json))
	}

	async fn years(&self) -> Result<Vec<String>> {
		let url = format!("{}/launches/years", self.api_base);
		let json = read_json(self.client.get(&url).send().await?).await?;
		let years = json
			.get("years")
			.and_then(Value::as_array)
			.map(|years| years.iter().filter_map(Value::as_str).map(str::to_string).collect())
			.unwrap_or_default();

		Ok(years)
	}
}
impl LaunchesApi for HttpLaunchesApi {
	fn fetch_page<'a>(
		&'a self,
		filter: &'a LaunchFilter,
		window: PageWindow,
	) -> BoxFuture<'a, Result<PageBody>> {
		Box::pin(self.page(filter, window))
	}

	fn fetch_years<'a>(&'a self) -> BoxFuture<'a, Result<Vec<String>>> {
		Box::pin(self.years())
	}
}

/// Only active filters are sent, matching what the query endpoint treats as absent.
pub fn page_query(filter: &LaunchFilter, window: PageWindow) -> Vec<(&'static str, String)> {
	let mut params =
		vec![("limit", window.limit.to_string()), ("offset", window.offset.to_string())];

	if !filter.search.is_empty() {
		params.push(("search", filter.search.clone()));
	}
	if let Some(year) = &filter.year {
		params.push(("year", year.clone()));
	}
	if let Some(status) = filter.status {
		params.push(("status", status.as_str().to_string()));
	}

	params
}

async fn read_json(res: Response) -> Result<Value> {
	let status = res.status();

	if status.is_success() {
		return Ok(res.json().await?);
	}

	let body: Value = res.json().await.unwrap_or(Value::Null);
	let message = body
		.get("error")
		.and_then(Value::as_str)
		.map(str::to_string)
		.unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

	Err(Error::Api { status: status.as_u16(), message })
}

#[cfg(test)]
mod tests {
	use super::*;
	use liftoff_domain::StatusFilter;

	#[test]
	fn missing_launches_array_is_malformed() {
		let body = PageBody::from_value(&serde_json::json!({ "hasMore": true, "total": 4 }));

		assert_eq!(body.launches, None);
		assert!(body.has_more);
		assert_eq!(body.total, Some(4));
	}

	#[test]
	fn query_omits_inactive_filters() {
		let filter = LaunchFilter::new("", Some("2014".to_string()), Some(StatusFilter::Upcoming));
		let params = page_query(&filter, PageWindow::new(20, 10));

		assert_eq!(
			params,
			vec![
				("limit", "10".to_string()),
				("offset", "20".to_string()),
				("year", "2014".to_string()),
				("status", "upcoming".to_string()),
			]
		);
	}
}
