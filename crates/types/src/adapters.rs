//! Error types for outbound adapters and the RPC fan-out client

use thiserror::Error;

/// Failure of the RPC fan-out client.
#[derive(Error, Debug)]
pub enum RpcError {
	#[error("No RPC URLs configured")]
	NoEndpoints,

	/// Every endpoint in the priority list failed; `failures` holds one
	/// reason per endpoint in attempt order.
	#[error("RPC {method} failed on all providers: {}", .failures.join(" | "))]
	AllEndpointsFailed {
		method: String,
		failures: Vec<String>,
	},
}

/// Failure of a single price source adapter attempt. These are absorbed by
/// the quote resolver's fallback chain and only become user-visible when
/// every source has failed.
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("GRAPH_API_KEY is not configured")]
	MissingGraphKey,

	#[error("{source_name} request failed ({status}): {body}")]
	UpstreamStatus {
		source_name: String,
		status: u16,
		body: String,
	},

	#[error("{source_name}: {message}")]
	Subgraph { source_name: String, message: String },

	#[error("{source_name} returned invalid derivedETH values")]
	InvalidDerived { source_name: String },

	#[error("Missing USD price in CoinGecko response")]
	MissingUsdPrice,

	#[error("upstream request error: {0}")]
	Http(#[from] reqwest::Error),
}
