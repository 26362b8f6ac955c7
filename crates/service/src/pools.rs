//! Tracked-pool listing
//!
//! The pool list itself is static and curated; only the block height is
//! fetched live, and its failure never fails the listing.

use std::sync::Arc;

use gateway_adapters::RpcClient;
use gateway_types::{Chain, TrackedPool, TrackedPoolsResponse};
use serde_json::json;
use tracing::warn;

/// Curated pool identifiers surfaced by the dashboard.
pub const TRACKED_POOL_IDS: [&str; 4] = [
	"0x3258f413c7a88cda2fa8709a589d221a80f6574f63df5a5b6774485d8acc39d9",
	"0x51f9d63dda41107d6513047f7ed18133346ce4f3f4c4faf899151d8939b3496e",
	"0x53b06f1bb8b622cc4b7dbd9bc9f4a34788034bc48702cd2af4135b48444d5b24",
	"0xb2f3bbaf23e0197ec2e6f9ab730d00aaf26a9119ecd583bbb9ef3146b4afa248",
];

pub const POOLS_RPC_SOURCE: &str = "rpc";
pub const POOLS_STATIC_SOURCE: &str = "static-pools";

/// The curated pools all live on the primary target chain.
pub const POOLS_CHAIN: Chain = Chain::Unichain;

pub struct PoolService {
	rpc: Arc<RpcClient>,
}

impl PoolService {
	pub fn new(rpc: Arc<RpcClient>) -> Self {
		Self { rpc }
	}

	/// List the tracked pools annotated with the current block height.
	/// Infallible: a failed or unparseable block lookup degrades to
	/// `block_number = 0` with the static source tag.
	pub async fn list(&self) -> TrackedPoolsResponse {
		let (block_number, source) = match self.current_block().await {
			Some(block) => (block, POOLS_RPC_SOURCE),
			None => (0, POOLS_STATIC_SOURCE),
		};

		TrackedPoolsResponse {
			chain: POOLS_CHAIN,
			block_number,
			source: source.to_string(),
			pools: TRACKED_POOL_IDS
				.iter()
				.map(|pool_id| TrackedPool::new(pool_id, POOLS_CHAIN, block_number))
				.collect(),
		}
	}

	async fn current_block(&self) -> Option<u64> {
		let value = match self.rpc.call("eth_blockNumber", json!([])).await {
			Ok(value) => value,
			Err(err) => {
				warn!(error = %err, "block height lookup failed, serving static pool list");
				return None;
			},
		};

		value
			.as_str()
			.map(|hex| hex.strip_prefix("0x").unwrap_or(hex))
			.and_then(|hex| u64::from_str_radix(hex, 16).ok())
	}
}
