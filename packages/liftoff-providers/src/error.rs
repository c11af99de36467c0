pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Upstream request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("Upstream launch payload is malformed: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("Header {name} is invalid: {message}")]
	InvalidHeader { name: String, message: String },
	#[error("Upstream returned {found} where a launch array was expected.")]
	NotAnArray { found: &'static str },
}
