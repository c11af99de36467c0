use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub upstream: Upstream,
	#[serde(default)]
	pub query: Query,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

/// Where the bulk launch snapshot is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct Upstream {
	pub api_base: String,
	pub path: String,
	/// Upper bound on records requested per snapshot read.
	#[serde(default = "default_fetch_limit")]
	pub fetch_limit: u32,
	pub timeout_ms: u64,
	/// Optional. Sent as a bearer token when present.
	pub api_key: Option<String>,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Query {
	pub default_limit: u32,
	pub max_limit: u32,
	/// How long a paging session may keep reading the snapshot taken at offset zero.
	/// Zero re-reads the upstream on every page.
	pub snapshot_ttl_secs: u64,
	pub max_cached_queries: u32,
}
impl Default for Query {
	fn default() -> Self {
		Self { default_limit: 10, max_limit: 1_000, snapshot_ttl_secs: 300, max_cached_queries: 64 }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_fetch_limit() -> u32 {
	1_000
}
