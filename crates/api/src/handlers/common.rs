use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
}

/// Build the `(status, {error})` pair handlers return on failure.
pub fn error_response(
	status: StatusCode,
	message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
	(
		status,
		Json(ErrorResponse {
			error: message.into(),
		}),
	)
}
