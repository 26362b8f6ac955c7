//! Swap quote model and errors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::AdapterError;
use crate::chain::{Chain, TokenSymbol};

/// Whether a quote's rate came from an on-chain-derived source or the
/// off-chain price index fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
	Live,
	Skeleton,
}

/// A resolved exchange rate between two tokens, with provenance and
/// fallback metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
	pub from_token: TokenSymbol,
	pub to_token: TokenSymbol,
	pub chain: Chain,
	/// Units of `to_token` per 1 `from_token`; always finite and positive.
	pub rate: f64,
	/// `amount_in * rate` rendered to 6 fractional digits, present only
	/// when a positive input amount was supplied.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount_out: Option<String>,
	pub source: String,
	pub timestamp: DateTime<Utc>,
	pub route_status: RouteStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fallback_reason: Option<String>,
}

#[derive(Error, Debug)]
pub enum QuoteError {
	#[error(transparent)]
	Source(#[from] AdapterError),

	#[error("{source_name} returned a non-positive or non-finite rate")]
	InvalidRate { source_name: String },
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_quote_serializes_camel_case() {
		let quote = SwapQuote {
			from_token: TokenSymbol::Weth,
			to_token: TokenSymbol::Usdc,
			chain: Chain::Unichain,
			rate: 3000.5,
			amount_out: None,
			source: "uniswap-v4-subgraph".to_string(),
			timestamp: Utc::now(),
			route_status: RouteStatus::Live,
			fallback_reason: None,
		};

		let json = serde_json::to_value(&quote).unwrap();
		assert_eq!(json["fromToken"], "WETH");
		assert_eq!(json["toToken"], "USDC");
		assert_eq!(json["routeStatus"], "live");
		// Absent optionals are omitted entirely, not serialized as null
		assert!(json.get("amountOut").is_none());
		assert!(json.get("fallbackReason").is_none());
	}
}
