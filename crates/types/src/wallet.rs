//! Wallet overview models and errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::RpcError;
use crate::chain::TokenSymbol;
use crate::units::UnitsError;

/// Decoded ERC-20 balance for one supported token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
	pub symbol: TokenSymbol,
	/// Human-readable balance, decoded from `raw_balance`.
	pub balance: String,
	/// Hex-encoded chain value as returned by the provider.
	pub raw_balance: String,
	pub decimals: u8,
}

/// Liquidity position entry. Position discovery is not implemented; the
/// list in [`WalletOverview`] is always empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPosition {
	pub pool_id: String,
	pub liquidity: String,
}

/// Point-in-time snapshot for one wallet address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOverview {
	/// Lowercase-normalized 20-byte hex address.
	pub address: String,
	/// Decoded native balance; `"0"` when the lookup failed.
	pub native_balance_eth: String,
	/// Empty (not an error) when token enumeration failed.
	pub token_balances: Vec<TokenBalance>,
	pub open_positions: Vec<OpenPosition>,
	pub source: String,
}

#[derive(Error, Debug)]
pub enum WalletError {
	#[error("Invalid wallet address")]
	InvalidAddress,

	#[error(transparent)]
	Rpc(#[from] RpcError),

	#[error(transparent)]
	Units(#[from] UnitsError),
}
