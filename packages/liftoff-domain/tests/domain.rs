use std::collections::HashSet;

use liftoff_domain::{
	LaunchFilter, LaunchRecord, PageWindow, StatusFilter, engine,
	filter::year_matches,
	normalize::dedup_by_flight,
	paginate::paginate,
	projection::{distinct_years, group_by_year},
	sort::sort_launches,
};
use liftoff_testkit::{LaunchBuilder, flight_numbers, launch, launches_in_year};

fn dated(flight: i64, name: &str, year: &str, date: &str, outcome: Option<bool>) -> LaunchRecord {
	LaunchBuilder::new(flight, name, year).date(date).success(outcome).build()
}

fn mixed_snapshot() -> Vec<LaunchRecord> {
	vec![
		dated(1, "FalconSat", "2006", "2006-03-24T22:30:00Z", Some(false)),
		dated(2, "DemoSat", "2007", "2007-03-21T01:10:00Z", Some(false)),
		dated(3, "Trailblazer", "2008", "2008-08-03T03:34:00Z", Some(false)),
		dated(4, "RatSat", "2008", "2008-09-28T23:15:00Z", Some(true)),
		dated(5, "RazakSat", "2009", "2009-07-13T03:35:00Z", Some(true)),
		dated(6, "Falcon 9 Test Flight", "2010", "2010-06-04T18:45:00Z", Some(true)),
		dated(7, "COTS 1", "2010", "2010-12-08T15:43:00Z", Some(true)),
		LaunchBuilder::new(8, "Starlink Next", "2022").undated().upcoming().build(),
		dated(9, "Unresolved", "2010", "2010-01-01T00:00:00Z", None),
	]
}

#[test]
fn duplicate_flight_keeps_first_occurrence() {
	let first = launch(42, "Original", "2015");
	let second = launch(42, "Drifted copy", "2015");
	let normalized = dedup_by_flight(vec![first.clone(), second]);

	assert_eq!(normalized, vec![first]);
}

#[test]
fn normalization_preserves_order_and_is_idempotent() {
	let raw = vec![
		launch(3, "C", "2010"),
		launch(1, "A", "2010"),
		launch(3, "C2", "2011"),
		launch(2, "B", "2012"),
		launch(1, "A2", "2013"),
	];
	let once = dedup_by_flight(raw);

	assert_eq!(flight_numbers(&once), vec![3, 1, 2]);
	assert_eq!(once[0].mission_name, "C");
	assert_eq!(dedup_by_flight(once.clone()), once);
	assert!(dedup_by_flight(Vec::new()).is_empty());
}

#[test]
fn failed_status_excludes_unknown_outcomes() {
	let records = vec![
		LaunchBuilder::new(1, "Lost", "2006").success(Some(false)).build(),
		launch(2, "Landed", "2016"),
		LaunchBuilder::new(3, "Future", "2030").upcoming().build(),
	];
	let filter = LaunchFilter::new("", None, Some(StatusFilter::Failed));

	assert_eq!(flight_numbers(&filter.apply(records)), vec![1]);
}

#[test]
fn success_status_requires_explicit_true() {
	let filter = LaunchFilter::new("", None, Some(StatusFilter::Success));
	let kept = filter.apply(mixed_snapshot());

	assert!(kept.iter().all(|record| record.launch_success == Some(true)));
	assert!(!flight_numbers(&kept).contains(&9));
	assert!(!flight_numbers(&kept).contains(&8));
}

#[test]
fn filter_keeps_exactly_the_matching_records() {
	let snapshot = mixed_snapshot();
	let filter = LaunchFilter::new("sat", Some("2008".to_string()), Some(StatusFilter::Success));
	let kept: HashSet<i64> = flight_numbers(&filter.apply(snapshot.clone())).into_iter().collect();

	for record in &snapshot {
		let all_hold = record.mission_name.to_lowercase().contains("sat")
			&& year_matches(&record.launch_year, "2008")
			&& record.launch_success == Some(true);

		assert_eq!(
			kept.contains(&record.flight_number),
			all_hold,
			"flight {}",
			record.flight_number
		);
	}

	assert_eq!(kept, HashSet::from([4]));
}

#[test]
fn search_is_case_insensitive_and_empty_matches_all() {
	let snapshot = mixed_snapshot();

	assert_eq!(
		flight_numbers(&LaunchFilter::new("COTS", None, None).apply(snapshot.clone())),
		vec![7]
	);
	assert_eq!(
		flight_numbers(&LaunchFilter::new("falcon", None, None).apply(snapshot.clone())),
		vec![1, 6]
	);
	assert_eq!(LaunchFilter::default().apply(snapshot.clone()).len(), snapshot.len());
}

#[test]
fn year_filter_compares_numeric_values() {
	let numeric: LaunchRecord = serde_json::from_value(serde_json::json!({
		"flight_number": 11,
		"mission_name": "Numeric year",
		"launch_year": 2010,
		"upcoming": false
	}))
	.expect("Failed to decode launch record.");
	let filter = LaunchFilter::new("", Some(" 2010 ".to_string()), None);

	assert!(filter.matches(&numeric));
	assert!(!LaunchFilter::new("", Some("2011".to_string()), None).matches(&numeric));
}

#[test]
fn status_parsing_rejects_unknown_values() {
	assert_eq!("SUCCESS".parse::<StatusFilter>(), Ok(StatusFilter::Success));
	assert_eq!(" upcoming ".parse::<StatusFilter>(), Ok(StatusFilter::Upcoming));

	let err = LaunchFilter::parse(None, None, Some("scrubbed")).expect_err("Expected rejection.");

	assert_eq!(err.value, "scrubbed");
	assert!(err.to_string().contains("expected one of success, failed, or upcoming"));
	assert_eq!(LaunchFilter::parse(Some(""), Some(""), Some("")), Ok(LaunchFilter::default()));
}

#[test]
fn sort_orders_by_year_then_date_descending() {
	let mut records = mixed_snapshot();

	sort_launches(&mut records);

	for pair in records.windows(2) {
		let (a, b) = (&pair[0], &pair[1]);
		let (ya, yb) = (a.year_number().unwrap_or(i64::MIN), b.year_number().unwrap_or(i64::MIN));

		assert!(ya > yb || (ya == yb && a.launch_date_utc >= b.launch_date_utc));
	}

	assert_eq!(flight_numbers(&records), vec![8, 7, 6, 9, 5, 4, 3, 2, 1]);
}

#[test]
fn sort_is_numeric_not_lexical() {
	let mut records = vec![launch(1, "Two", "2"), launch(2, "Ten", "10"), launch(3, "Nine", "9")];

	sort_launches(&mut records);

	assert_eq!(flight_numbers(&records), vec![2, 3, 1]);
}

#[test]
fn sort_is_stable_for_identical_keys() {
	let stamp = "2018-02-06T20:45:00Z";
	let mut records: Vec<LaunchRecord> = (1..=5)
		.map(|flight| LaunchBuilder::new(flight, "Heavy", "2018").date(stamp).build())
		.collect();

	records.reverse();
	sort_launches(&mut records);

	assert_eq!(flight_numbers(&records), vec![5, 4, 3, 2, 1]);
}

#[test]
fn fifteen_matches_split_into_two_pages() {
	let prepared = engine::prepare(launches_in_year(100, 15, "2019"), &LaunchFilter::default());
	let first = paginate(&prepared, PageWindow::new(0, 10));
	let second = paginate(&prepared, PageWindow::new(10, 10));

	assert_eq!((first.items.len(), first.has_more, first.total), (10, true, 15));
	assert_eq!((second.items.len(), second.has_more, second.total), (5, false, 15));
}

#[test]
fn concatenated_pages_reproduce_the_full_sequence() {
	let mut raw = launches_in_year(1, 23, "2017");

	raw.extend(launches_in_year(30, 12, "2018"));
	raw.extend(launches_in_year(1, 5, "2020"));

	let prepared = engine::prepare(raw, &LaunchFilter::default());
	let mut window = PageWindow::new(0, 10);
	let mut collected = Vec::new();

	loop {
		let page = paginate(&prepared, window);

		assert_eq!(page.total, prepared.len());
		collected.extend(page.items);

		if !page.has_more {
			break;
		}

		window = window.next();
	}

	let unique: HashSet<i64> = flight_numbers(&collected).into_iter().collect();

	assert_eq!(collected.len(), 35);
	assert_eq!(unique.len(), collected.len());
	assert_eq!(collected, prepared);
}

#[test]
fn year_projection_groups_newest_first() {
	let collection = vec![
		launch(1, "A", "2010"),
		launch(2, "B", "2012"),
		launch(3, "C", "2010"),
		launch(4, "D", "9"),
		launch(5, "E", "2012"),
	];
	let groups = group_by_year(&collection);
	let years: Vec<&str> = groups.iter().map(|group| group.year.as_str()).collect();

	assert_eq!(years, vec!["2012", "2010", "9"]);
	assert_eq!(flight_numbers(&groups[0].launches), vec![2, 5]);
	assert_eq!(flight_numbers(&groups[1].launches), vec![1, 3]);
	assert!(group_by_year(&[]).is_empty());
}

#[test]
fn distinct_years_are_sorted_descending() {
	let years = distinct_years(&mixed_snapshot());

	assert_eq!(years, vec!["2022", "2010", "2009", "2008", "2007", "2006"]);
}
