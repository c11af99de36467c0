use std::time::Duration as StdDuration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};
use liftoff_config::Upstream;
use liftoff_domain::LaunchRecord;

/// Reads one bulk snapshot of raw launch records. The result may contain duplicate flights.
pub async fn fetch_launches(cfg: &Upstream) -> Result<Vec<LaunchRecord>> {
	let client = Client::builder().timeout(StdDuration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let res = client
		.get(&url)
		.query(&[("limit", cfg.fetch_limit)])
		.headers(crate::request_headers(cfg.api_key.as_deref(), &cfg.default_headers)?)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;
	let records = parse_snapshot(json)?;

	tracing::debug!(%url, count = records.len(), "Fetched upstream launch snapshot.");

	Ok(records)
}

pub fn parse_snapshot(json: Value) -> Result<Vec<LaunchRecord>> {
	if json.is_array() {
		return Ok(serde_json::from_value(json)?);
	}

	let found = match json {
		Value::Object(_) => "an object",
		Value::Null => "null",
		_ => "a scalar",
	};

	Err(Error::NotAnArray { found })
}
