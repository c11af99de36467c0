use reqwest::{StatusCode, header::AUTHORIZATION};
use serde_json::Map;

use liftoff_config::Upstream;
use liftoff_providers::{Error, upstream};
use liftoff_testkit::{STUB_PATH, UpstreamStub, flight_numbers, launch};

fn upstream_config(api_base: String) -> Upstream {
	Upstream {
		api_base,
		path: STUB_PATH.to_string(),
		fetch_limit: 1_000,
		timeout_ms: 2_000,
		api_key: None,
		default_headers: Map::new(),
	}
}

#[test]
fn builds_bearer_auth_header() {
	let headers = liftoff_providers::request_headers(Some("secret"), &Map::new())
		.expect("Failed to build headers.");
	let value = headers.get(AUTHORIZATION).expect("Missing authorization header.");

	assert_eq!(value, "Bearer secret");
}

#[test]
fn omits_auth_header_without_key() {
	let headers =
		liftoff_providers::request_headers(None, &Map::new()).expect("Failed to build headers.");

	assert!(headers.get(AUTHORIZATION).is_none());
}

#[test]
fn rejects_non_string_default_header() {
	let mut defaults = Map::new();

	defaults.insert("x-trace".to_string(), serde_json::json!(true));

	let err = liftoff_providers::request_headers(None, &defaults).expect_err("Expected error.");

	assert!(matches!(err, Error::InvalidHeader { ref name, .. } if name == "x-trace"));
}

#[test]
fn rejects_unparsable_header_name() {
	let mut defaults = Map::new();

	defaults.insert("bad header".to_string(), serde_json::json!("1"));

	let err = liftoff_providers::request_headers(None, &defaults).expect_err("Expected error.");

	assert!(err.to_string().starts_with("Header bad header is invalid"));
}

#[tokio::test]
async fn fetches_snapshot_from_upstream() {
	let records = vec![launch(1, "FalconSat", "2006"), launch(1, "FalconSat again", "2006")];
	let stub = UpstreamStub::spawn(&records).await.expect("Failed to start upstream stub.");
	let fetched =
		upstream::fetch_launches(&upstream_config(stub.api_base())).await.expect("Fetch failed.");

	assert_eq!(flight_numbers(&fetched), vec![1, 1]);
	assert_eq!(fetched, records);
	assert_eq!(stub.hits(), 1);
}

#[tokio::test]
async fn upstream_error_status_is_an_error() {
	let stub = UpstreamStub::spawn(&[]).await.expect("Failed to start upstream stub.");

	stub.fail_with(StatusCode::BAD_GATEWAY);

	let err = upstream::fetch_launches(&upstream_config(stub.api_base()))
		.await
		.expect_err("Expected upstream failure.");

	assert!(matches!(err, Error::Http(_)));
}
