//! Gateway Adapters
//!
//! Outbound HTTP clients: the JSON-RPC fan-out client and the two price
//! source families (CoinGecko spot index, Uniswap subgraphs).

pub mod coingecko;
pub mod rpc;
pub mod subgraph;

pub use coingecko::{CoinGeckoAdapter, COINGECKO_SOURCE};
pub use rpc::RpcClient;
pub use subgraph::{
	candidates_for, SubgraphAdapter, SubgraphCandidate, UNISWAP_V3_SOURCE, UNISWAP_V4_SOURCE,
};
