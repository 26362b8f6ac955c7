//! Tracked liquidity pool models

use serde::{Deserialize, Serialize};

use crate::chain::Chain;

/// One curated liquidity pool, annotated with a best-effort block height.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedPool {
	pub pool_id: String,
	pub chain: Chain,
	pub block_number: u64,
	pub explorer_url: String,
}

impl TrackedPool {
	pub fn new(pool_id: &str, chain: Chain, block_number: u64) -> Self {
		Self {
			pool_id: pool_id.to_string(),
			chain,
			block_number,
			explorer_url: format!("https://app.uniswap.org/explore/pools/{chain}/{pool_id}"),
		}
	}
}

/// Response body for the pool listing endpoint. Always produced, even when
/// the block-height lookup fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedPoolsResponse {
	pub chain: Chain,
	pub block_number: u64,
	pub source: String,
	pub pools: Vec<TrackedPool>,
}
