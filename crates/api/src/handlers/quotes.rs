use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::{info, warn};

use crate::handlers::common::{error_response, ErrorResponse};
use crate::state::AppState;
use gateway_types::{Chain, SwapQuote, TokenSymbol};

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
	pub from: Option<String>,
	pub to: Option<String>,
	pub chain: Option<String>,
	#[serde(rename = "amountIn")]
	pub amount_in: Option<String>,
}

/// GET /api/uniswap/quote (also mounted at /api/swap-rate)
pub async fn get_quote(
	State(state): State<AppState>,
	Query(params): Query<QuoteParams>,
) -> Result<Json<SwapQuote>, (StatusCode, Json<ErrorResponse>)> {
	let from_raw = params.from.as_deref().map(str::trim).unwrap_or_default();
	let to_raw = params.to.as_deref().map(str::trim).unwrap_or_default();

	if from_raw.is_empty() || to_raw.is_empty() {
		return Err(error_response(
			StatusCode::BAD_REQUEST,
			"Missing required query params: from, to",
		));
	}

	let chain: Chain = params
		.chain
		.as_deref()
		.map(str::trim)
		.filter(|chain| !chain.is_empty())
		.unwrap_or("unichain")
		.parse()
		.map_err(|err| error_response(StatusCode::BAD_REQUEST, format!("{err}")))?;

	let from: TokenSymbol = from_raw
		.parse()
		.map_err(|err| error_response(StatusCode::BAD_REQUEST, format!("{err}")))?;
	let to: TokenSymbol = to_raw
		.parse()
		.map_err(|err| error_response(StatusCode::BAD_REQUEST, format!("{err}")))?;

	info!(%from, %to, %chain, "received quote request");

	match state
		.quote_service
		.resolve(from, to, chain, params.amount_in.as_deref())
		.await
	{
		Ok(quote) => Ok(Json(quote)),
		Err(err) => {
			warn!(%from, %to, %chain, error = %err, "quote resolution failed on all sources");
			Err(error_response(StatusCode::BAD_GATEWAY, err.to_string()))
		},
	}
}
