use liftoff_domain::UnsupportedStatus;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Invalid request: {0}")]
	UnsupportedStatus(#[from] UnsupportedStatus),
	#[error("Upstream unavailable: {message}")]
	UpstreamUnavailable { message: String },
}
impl From<liftoff_providers::Error> for Error {
	fn from(err: liftoff_providers::Error) -> Self {
		Self::UpstreamUnavailable { message: err.to_string() }
	}
}
