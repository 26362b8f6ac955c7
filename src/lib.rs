//! DeFi Gateway Library
//!
//! Quote-aggregation and RPC fan-out gateway: resolves swap rates through
//! a prioritized chain of price sources, fans chain RPC calls out across
//! redundant providers, and assembles wallet-balance snapshots.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

// Core domain types
pub use gateway_types::{
	format_units, AdapterError, Chain, QuoteError, RouteStatus, RpcError, SwapQuote, TokenBalance,
	TokenSymbol, TrackedPool, TrackedPoolsResponse, WalletError, WalletOverview,
};

// Service layer
pub use gateway_service::{PoolService, QuoteService, WalletService, TRACKED_POOL_IDS};

// Adapters
pub use gateway_adapters::{CoinGeckoAdapter, RpcClient, SubgraphAdapter};

// API layer
pub use gateway_api::{create_router, AppState};

// Config
pub use gateway_config::{load_config, LogFormat, Settings};

// Module aliases for direct access to the member crates
pub mod types {
	pub use gateway_types::*;
}

pub mod config {
	pub use gateway_config::*;
}

pub mod adapters {
	pub use gateway_adapters::*;
}

pub mod service {
	pub use gateway_service::*;
}

pub mod api {
	pub use gateway_api::*;
}

/// Builder pattern for configuring the gateway
#[derive(Default)]
pub struct GatewayBuilder {
	settings: Option<Settings>,
}

impl GatewayBuilder {
	pub fn new() -> Self {
		Self { settings: None }
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Wire the shared HTTP client, fan-out RPC client, adapters, and
	/// services into application state.
	pub fn build_state(settings: &Settings) -> Result<AppState, reqwest::Error> {
		let client = reqwest::Client::builder()
			.timeout(Duration::from_millis(settings.timeouts.request_ms))
			.build()?;

		let rpc = Arc::new(RpcClient::new(client.clone(), settings.rpc_endpoints()));
		let subgraph = SubgraphAdapter::new(
			client.clone(),
			settings.credentials.graph_api_key.clone(),
		);
		let coingecko =
			CoinGeckoAdapter::new(client, settings.credentials.coingecko_api_key.clone());

		Ok(AppState {
			quote_service: Arc::new(QuoteService::new(subgraph, coingecko)),
			pool_service: Arc::new(PoolService::new(Arc::clone(&rpc))),
			wallet_service: Arc::new(WalletService::new(rpc)),
		})
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(&self, settings: &Settings) {
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

		match settings.logging.format {
			LogFormat::Json => {
				tracing_subscriber::fmt()
					.json()
					.with_env_filter(env_filter)
					.init();
			},
			LogFormat::Pretty => {
				tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter)
					.init();
			},
			LogFormat::Compact => {
				tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter)
					.init();
			},
		}
	}

	/// Build the configured router with its state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		let state = Self::build_state(&settings)?;
		let router = create_router(&settings.assets.dir).with_state(state.clone());
		Ok((router, state))
	}

	/// Start the complete server: load .env and configuration, initialize
	/// tracing, then bind and serve.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		self.init_tracing_from_settings(&settings);

		info!(
			endpoints = settings.rpc_endpoints().len(),
			graph_key = settings.credentials.graph_api_key.is_some(),
			coingecko_key = settings.credentials.coingecko_api_key.is_some(),
			"configuring DeFi gateway"
		);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		info!("DeFi gateway listening on {}", bind_addr);
		info!("API endpoints available:");
		info!("  GET  /api/uniswap/quote");
		info!("  GET  /api/swap-rate");
		info!("  GET  /api/onchain/pools");
		info!("  GET  /api/wallet/overview");

		axum::serve(listener, app).await?;

		Ok(())
	}
}
