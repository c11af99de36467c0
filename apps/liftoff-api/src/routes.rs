use axum::{
	Json, Router,
	extract::{Query, State, rejection::QueryRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use crate::state::AppState;
use liftoff_service::{Error as ServiceError, QueryRequest, QueryResponse, YearsResponse};

const UPSTREAM_FAILURE: &str = "Failed to fetch data";

/// Launch routes, served both at the root and under `/api`.
pub fn router(state: AppState) -> Router {
	let launches = Router::new()
		.route("/launches", get(launches))
		.route("/launches/years", get(years));

	Router::new()
		.route("/health", get(health))
		.merge(launches.clone())
		.nest("/api", launches)
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn launches(
	State(state): State<AppState>,
	query: Result<Query<QueryRequest>, QueryRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
	let Query(req) = query?;
	let response = state.service.query(req).await?;

	Ok(Json(response))
}

async fn years(State(state): State<AppState>) -> Result<Json<YearsResponse>, ApiError> {
	let response = state.service.years().await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self { status, message: message.into() }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } => Self::new(StatusCode::BAD_REQUEST, message),
			ServiceError::UnsupportedStatus(err) =>
				Self::new(StatusCode::BAD_REQUEST, err.to_string()),
			// Upstream details stay in the log.
			ServiceError::UpstreamUnavailable { .. } =>
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE),
		}
	}
}
impl From<QueryRejection> for ApiError {
	fn from(rejection: QueryRejection) -> Self {
		Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { error: self.message })).into_response()
	}
}
