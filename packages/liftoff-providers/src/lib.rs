pub mod upstream;

mod error;

pub use error::{Error, Result};

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

pub fn request_headers(
	api_key: Option<&str>,
	default_headers: &Map<String, Value>,
) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	if let Some(api_key) = api_key {
		let value = header_value(AUTHORIZATION.as_str(), &format!("Bearer {api_key}"))?;

		headers.insert(AUTHORIZATION, value);
	}

	for (key, value) in default_headers {
		let Some(raw) = value.as_str() else {
			return Err(invalid_header(key, "value must be a string"));
		};
		let name = HeaderName::from_bytes(key.as_bytes()).map_err(|err| invalid_header(key, err))?;

		headers.insert(name, header_value(key, raw)?);
	}

	Ok(headers)
}

fn header_value(name: &str, raw: &str) -> Result<HeaderValue> {
	HeaderValue::from_str(raw).map_err(|err| invalid_header(name, err))
}

fn invalid_header(name: &str, message: impl ToString) -> Error {
	Error::InvalidHeader { name: name.to_string(), message: message.to_string() }
}
