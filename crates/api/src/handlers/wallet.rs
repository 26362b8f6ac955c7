use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::warn;

use crate::handlers::common::{error_response, ErrorResponse};
use crate::state::AppState;
use gateway_types::WalletOverview;

#[derive(Debug, Deserialize)]
pub struct WalletParams {
	pub address: Option<String>,
}

/// GET /api/wallet/overview
pub async fn get_wallet_overview(
	State(state): State<AppState>,
	Query(params): Query<WalletParams>,
) -> Result<Json<WalletOverview>, (StatusCode, Json<ErrorResponse>)> {
	let address = match params.address.as_deref() {
		Some(address) if !address.trim().is_empty() => address,
		_ => {
			return Err(error_response(
				StatusCode::BAD_REQUEST,
				"Missing required query param: address",
			));
		},
	};

	match state.wallet_service.overview(address).await {
		Ok(overview) => Ok(Json(overview)),
		Err(err) => {
			warn!(error = %err, "wallet overview failed");
			Err(error_response(StatusCode::BAD_GATEWAY, err.to_string()))
		},
	}
}
