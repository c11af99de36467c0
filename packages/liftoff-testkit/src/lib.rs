mod error;

pub use error::{Error, Result};

use std::{
	net::SocketAddr,
	sync::{
		Arc, Mutex,
		atomic::{AtomicUsize, Ordering},
	},
};

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde_json::{Map, Value};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tokio::{net::TcpListener, task::JoinHandle};

use liftoff_domain::{LaunchLinks, LaunchRecord};

pub const STUB_PATH: &str = "/v3/launches";

/// Builder for launch fixtures. Defaults describe a successful past launch.
pub struct LaunchBuilder {
	record: LaunchRecord,
}
impl LaunchBuilder {
	pub fn new(flight_number: i64, mission_name: &str, year: &str) -> Self {
		let date = format!("{year}-06-01T00:00:00Z");

		Self {
			record: LaunchRecord {
				flight_number,
				mission_name: mission_name.to_string(),
				launch_year: year.to_string(),
				launch_date_utc: OffsetDateTime::parse(&date, &Rfc3339).ok(),
				launch_success: Some(true),
				upcoming: false,
				details: None,
				links: None,
				extra: Map::new(),
			},
		}
	}

	/// Panics on malformed input; fixtures are static.
	pub fn date(mut self, rfc3339: &str) -> Self {
		self.record.launch_date_utc =
			Some(OffsetDateTime::parse(rfc3339, &Rfc3339).expect("Fixture date must be RFC 3339."));

		self
	}

	pub fn undated(mut self) -> Self {
		self.record.launch_date_utc = None;

		self
	}

	pub fn success(mut self, outcome: Option<bool>) -> Self {
		self.record.launch_success = outcome;

		self
	}

	pub fn upcoming(mut self) -> Self {
		self.record.upcoming = true;
		self.record.launch_success = None;

		self
	}

	pub fn patch(mut self, url: &str) -> Self {
		self.record.links =
			Some(LaunchLinks { mission_patch: Some(url.to_string()), ..Default::default() });

		self
	}

	pub fn extra(mut self, key: &str, value: Value) -> Self {
		self.record.extra.insert(key.to_string(), value);

		self
	}

	pub fn build(self) -> LaunchRecord {
		self.record
	}
}

pub fn launch(flight_number: i64, mission_name: &str, year: &str) -> LaunchRecord {
	LaunchBuilder::new(flight_number, mission_name, year).build()
}

/// `count` successful launches spread over consecutive days of one year.
pub fn launches_in_year(first_flight: i64, count: usize, year: &str) -> Vec<LaunchRecord> {
	(0..count)
		.map(|i| {
			let flight = first_flight + i as i64;
			let day = i % 28 + 1;

			LaunchBuilder::new(flight, &format!("Mission {flight}"), year)
				.date(&format!("{year}-03-{day:02}T12:00:00Z"))
				.build()
		})
		.collect()
}

pub fn flight_numbers(records: &[LaunchRecord]) -> Vec<i64> {
	records.iter().map(|record| record.flight_number).collect()
}

#[derive(Clone)]
struct StubState {
	body: Arc<Mutex<Value>>,
	status: Arc<Mutex<StatusCode>>,
	hits: Arc<AtomicUsize>,
}

/// In-process stand-in for the upstream launch feed, serving [`STUB_PATH`].
pub struct UpstreamStub {
	addr: SocketAddr,
	state: StubState,
	handle: JoinHandle<()>,
}
impl UpstreamStub {
	pub async fn spawn(records: &[LaunchRecord]) -> Result<Self> {
		let body = serde_json::to_value(records)
			.map_err(|err| Error::Message(format!("Failed to encode fixtures: {err}.")))?;

		Self::spawn_raw(body).await
	}

	/// Serves `body` verbatim, which lets tests feed shapes the domain types cannot express.
	pub async fn spawn_raw(body: Value) -> Result<Self> {
		let state = StubState {
			body: Arc::new(Mutex::new(body)),
			status: Arc::new(Mutex::new(StatusCode::OK)),
			hits: Arc::new(AtomicUsize::new(0)),
		};
		let app = Router::new().route(STUB_PATH, get(serve)).with_state(state.clone());
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Ok(Self { addr, state, handle })
	}

	pub fn api_base(&self) -> String {
		format!("http://{}", self.addr)
	}

	pub fn hits(&self) -> usize {
		self.state.hits.load(Ordering::SeqCst)
	}

	/// Replaces the snapshot served from now on.
	pub fn set_records(&self, records: &[LaunchRecord]) {
		let body = serde_json::to_value(records).expect("Fixtures must encode.");

		*self.state.body.lock().unwrap_or_else(|err| err.into_inner()) = body;
	}

	pub fn fail_with(&self, status: StatusCode) {
		*self.state.status.lock().unwrap_or_else(|err| err.into_inner()) = status;
	}
}
impl Drop for UpstreamStub {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

async fn serve(State(state): State<StubState>) -> (StatusCode, Json<Value>) {
	state.hits.fetch_add(1, Ordering::SeqCst);

	let status = *state.status.lock().unwrap_or_else(|err| err.into_inner());

	if !status.is_success() {
		return (status, Json(serde_json::json!({ "error": "stub failure" })));
	}

	let body = state.body.lock().unwrap_or_else(|err| err.into_inner()).clone();

	(status, Json(body))
}
