use std::sync::Arc;

use gateway_service::{PoolService, QuoteService, WalletService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub quote_service: Arc<QuoteService>,
	pub pool_service: Arc<PoolService>,
	pub wallet_service: Arc<WalletService>,
}
