use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{LaunchRecord, record};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
	Success,
	Failed,
	Upcoming,
}
impl StatusFilter {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Failed => "failed",
			Self::Upcoming => "upcoming",
		}
	}

	/// `Success` and `Failed` require an explicit outcome; unknown outcomes match neither.
	pub fn matches(self, record: &LaunchRecord) -> bool {
		match self {
			Self::Success => record.launch_success == Some(true),
			Self::Failed => record.launch_success == Some(false),
			Self::Upcoming => record.upcoming,
		}
	}
}
impl FromStr for StatusFilter {
	type Err = UnsupportedStatus;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let value = raw.trim();

		[Self::Success, Self::Failed, Self::Upcoming]
			.into_iter()
			.find(|status| status.as_str().eq_ignore_ascii_case(value))
			.ok_or_else(|| UnsupportedStatus { value: value.to_string() })
	}
}
impl Display for StatusFilter {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported status '{value}'; expected one of success, failed, or upcoming.")]
pub struct UnsupportedStatus {
	pub value: String,
}

/// The filter half of a launch query. Every active predicate must hold for a record to match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchFilter {
	#[serde(default)]
	pub search: String,
	pub year: Option<String>,
	pub status: Option<StatusFilter>,
}
impl LaunchFilter {
	/// Blank years are treated as absent.
	pub fn new(search: impl Into<String>, year: Option<String>, status: Option<StatusFilter>) -> Self {
		let year = year.map(|year| year.trim().to_string()).filter(|year| !year.is_empty());

		Self { search: search.into(), year, status }
	}

	/// Parses the wire form, where blank strings mean "no filter".
	pub fn parse(
		search: Option<&str>,
		year: Option<&str>,
		status: Option<&str>,
	) -> Result<Self, UnsupportedStatus> {
		let status = match status.map(str::trim) {
			Some("") | None => None,
			Some(raw) => Some(raw.parse()?),
		};

		Ok(Self::new(search.unwrap_or_default(), year.map(str::to_string), status))
	}

	pub fn is_empty(&self) -> bool {
		self.search.is_empty() && self.year.is_none() && self.status.is_none()
	}

	pub fn matches(&self, record: &LaunchRecord) -> bool {
		self.matches_with_needle(record, &self.search.to_lowercase())
	}

	pub fn apply(&self, records: Vec<LaunchRecord>) -> Vec<LaunchRecord> {
		let needle = self.search.to_lowercase();

		records.into_iter().filter(|record| self.matches_with_needle(record, &needle)).collect()
	}

	fn matches_with_needle(&self, record: &LaunchRecord, needle: &str) -> bool {
		if !needle.is_empty() && !record.mission_name.to_lowercase().contains(needle) {
			return false;
		}
		if let Some(year) = self.year.as_deref()
			&& !year_matches(&record.launch_year, year)
		{
			return false;
		}

		self.status.map(|status| status.matches(record)).unwrap_or(true)
	}
}

/// Numeric equality when both sides are integers, trimmed text equality otherwise.
pub fn year_matches(record_year: &str, wanted: &str) -> bool {
	match (record::parse_year(record_year), record::parse_year(wanted)) {
		(Some(left), Some(right)) => left == right,
		_ => record_year.trim() == wanted.trim(),
	}
}
