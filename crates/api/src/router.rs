use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	services::ServeDir,
	set_header::SetResponseHeaderLayer,
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{get_pools, get_quote, get_wallet_overview};
use crate::state::AppState;

pub fn create_router(assets_dir: &str) -> Router<AppState> {
	// Layers prepared first so they're in scope for all route groups
	let cors = CorsLayer::permissive();
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	// Gateway responses must never be cached; static assets are exempt
	let no_store = SetResponseHeaderLayer::overriding(
		header::CACHE_CONTROL,
		HeaderValue::from_static("no-store"),
	);

	let api_routes = Router::new()
		.route("/api/uniswap/quote", get(get_quote))
		.route("/api/swap-rate", get(get_quote))
		.route("/api/onchain/pools", get(get_pools))
		.route("/api/wallet/overview", get(get_wallet_overview))
		.layer(no_store);

	// Everything outside /api falls through to static asset serving
	api_routes
		.fallback_service(ServeDir::new(assets_dir))
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
}
