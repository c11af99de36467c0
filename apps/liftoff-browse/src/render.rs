use std::fmt::{Display, Formatter, Result as FmtResult};

use liftoff_client::{FetchStatus, Session};
use liftoff_domain::{LaunchFilter, LaunchRecord};

const UNDATED: &str = "TBD";

/// Plain-text view of the session: filters, year options, then launches grouped by year.
pub struct SessionView<'a> {
	session: &'a Session,
	years: &'a [String],
}
impl Display for SessionView<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		let session = self.session;

		writeln!(f, "Filters: {}", filters(session.filters()))?;

		if !self.years.is_empty() {
			writeln!(f, "Years:   {}", self.years.join(", "))?;
		}

		writeln!(
			f,
			"Loaded:  {} launch(es), {}",
			session.collection().len(),
			progress(session.status())
		)?;

		if session.collection().is_empty() && session.status() != FetchStatus::Error {
			return writeln!(f, "\nNo launches found.");
		}

		for group in session.year_groups() {
			writeln!(f, "\n{}", group.year)?;

			for record in &group.launches {
				writeln!(f, "  {}", launch_line(record))?;
			}
		}

		Ok(())
	}
}

pub fn session<'a>(session: &'a Session, years: &'a [String]) -> SessionView<'a> {
	SessionView { session, years }
}

pub fn launch_line(record: &LaunchRecord) -> String {
	let date = record
		.launch_date_utc
		.map(|date| date.date().to_string())
		.unwrap_or_else(|| UNDATED.to_string());

	format!(
		"#{:<4} {:<10} {:<9} {}",
		record.flight_number,
		date,
		record.status().label(),
		record.mission_name
	)
}

fn filters(filter: &LaunchFilter) -> String {
	if filter.is_empty() {
		return "none".to_string();
	}

	let mut parts = Vec::new();

	if !filter.search.is_empty() {
		parts.push(format!("search={:?}", filter.search));
	}
	if let Some(year) = &filter.year {
		parts.push(format!("year={year}"));
	}
	if let Some(status) = filter.status {
		parts.push(format!("status={status}"));
	}

	parts.join(" ")
}

fn progress(status: FetchStatus) -> &'static str {
	match status {
		FetchStatus::Idle => "more available (:more)",
		FetchStatus::LoadingInitial | FetchStatus::LoadingMore => "loading",
		FetchStatus::Error => "last request failed; change filters to retry",
		FetchStatus::Exhausted => "all loaded",
	}
}
