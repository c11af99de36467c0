use serde::{Deserialize, Serialize};

use crate::{LaunchService, Result};
use liftoff_domain::{normalize, projection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearsResponse {
	pub years: Vec<String>,
}

impl LaunchService {
	/// Distinct launch years across the whole upstream snapshot, newest first.
	pub async fn years(&self) -> Result<YearsResponse> {
		let records = normalize::dedup_by_flight(self.fetch_snapshot().await?);

		Ok(YearsResponse { years: projection::distinct_years(&records) })
	}
}
