use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// One launch as delivered by the upstream feed.
///
/// `flight_number` is only unique after [`crate::normalize::dedup_by_flight`]. Fields the engine
/// does not interpret are kept in `extra` and serialized back untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
	pub flight_number: i64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub mission_name: String,
	#[serde(deserialize_with = "deserialize_year")]
	pub launch_year: String,
	#[serde(default, with = "crate::launch_date")]
	pub launch_date_utc: Option<OffsetDateTime>,
	/// `None` means the outcome is unknown, which is distinct from a failure.
	#[serde(default)]
	pub launch_success: Option<bool>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub upcoming: bool,
	#[serde(default)]
	pub details: Option<String>,
	#[serde(default)]
	pub links: Option<LaunchLinks>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl LaunchRecord {
	pub fn status(&self) -> LaunchStatus {
		if self.upcoming {
			return LaunchStatus::Upcoming;
		}

		match self.launch_success {
			Some(true) => LaunchStatus::Success,
			Some(false) => LaunchStatus::Failed,
			None => LaunchStatus::Unknown,
		}
	}

	/// Numeric value of `launch_year`, if it has one.
	pub fn year_number(&self) -> Option<i64> {
		parse_year(&self.launch_year)
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchLinks {
	pub mission_patch: Option<String>,
	pub mission_patch_small: Option<String>,
	pub article_link: Option<String>,
	pub wikipedia: Option<String>,
	pub video_link: Option<String>,
	pub presskit: Option<String>,
	pub reddit_campaign: Option<String>,
	pub reddit_launch: Option<String>,
	#[serde(deserialize_with = "null_as_default")]
	pub flickr_images: Vec<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchStatus {
	Upcoming,
	Success,
	Failed,
	Unknown,
}
impl LaunchStatus {
	pub fn label(self) -> &'static str {
		match self {
			Self::Upcoming => "Upcoming",
			Self::Success => "Success",
			Self::Failed => "Failed",
			Self::Unknown => "Unknown",
		}
	}
}
impl Display for LaunchStatus {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
	Text(String),
	Number(i64),
}

pub(crate) fn parse_year(raw: &str) -> Option<i64> {
	raw.trim().parse().ok()
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	match RawYear::deserialize(deserializer)? {
		RawYear::Text(text) => Ok(text),
		RawYear::Number(number) => Ok(number.to_string()),
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
