use axum::extract::State;
use axum::response::Json;

use crate::state::AppState;
use gateway_types::TrackedPoolsResponse;

/// GET /api/onchain/pools - never fails; block height degrades to 0
pub async fn get_pools(State(state): State<AppState>) -> Json<TrackedPoolsResponse> {
	Json(state.pool_service.list().await)
}
