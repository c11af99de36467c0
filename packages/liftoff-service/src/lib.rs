pub mod cache;
pub mod query;
pub mod years;

mod error;

pub use error::{Error, Result};
pub use query::{QueryParameters, QueryRequest, QueryResponse};
pub use years::YearsResponse;

use std::{future::Future, pin::Pin, sync::Arc, time::Duration};

use liftoff_config::{Config, Upstream};
use liftoff_domain::LaunchRecord;
use liftoff_providers::upstream;

use crate::cache::SnapshotCache;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of raw, possibly duplicate-bearing launch snapshots.
pub trait UpstreamSource
where
	Self: Send + Sync,
{
	fn fetch<'a>(
		&'a self,
		cfg: &'a Upstream,
	) -> BoxFuture<'a, liftoff_providers::Result<Vec<LaunchRecord>>>;
}

struct HttpUpstream;
impl UpstreamSource for HttpUpstream {
	fn fetch<'a>(
		&'a self,
		cfg: &'a Upstream,
	) -> BoxFuture<'a, liftoff_providers::Result<Vec<LaunchRecord>>> {
		Box::pin(upstream::fetch_launches(cfg))
	}
}

pub struct LaunchService {
	pub cfg: Config,
	pub upstream: Arc<dyn UpstreamSource>,
	cache: SnapshotCache,
}
impl LaunchService {
	pub fn new(cfg: Config) -> Self {
		Self::with_upstream(cfg, Arc::new(HttpUpstream))
	}

	pub fn with_upstream(cfg: Config, upstream: Arc<dyn UpstreamSource>) -> Self {
		let cache = SnapshotCache::new(
			Duration::from_secs(cfg.query.snapshot_ttl_secs),
			cfg.query.max_cached_queries as usize,
		);

		Self { cfg, upstream, cache }
	}

	/// Reads a fresh snapshot, logging upstream failures.
	pub(crate) async fn fetch_snapshot(&self) -> Result<Vec<LaunchRecord>> {
		self.upstream.fetch(&self.cfg.upstream).await.map_err(|err| {
			tracing::error!(error = %err, "Failed to fetch upstream launches.");

			Error::from(err)
		})
	}
}
