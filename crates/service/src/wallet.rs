//! Wallet overview assembly
//!
//! Combines a native-balance lookup with token-balance enumeration and
//! per-token metadata lookups. Each stage degrades independently: a failed
//! native lookup yields `"0"`, a failed enumeration yields an empty token
//! list. Only a malformed address fails the whole overview.

use std::sync::Arc;

use futures::future::join_all;
use gateway_adapters::RpcClient;
use gateway_types::{format_units, TokenBalance, TokenSymbol, WalletError, WalletOverview};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

/// Provenance tag: chain RPC plus the Alchemy token extension, with the
/// token stage running best-effort.
pub const WALLET_SOURCE: &str = "rpc+alchemy-fallback-safe";

const NATIVE_DECIMALS: u8 = 18;

pub struct WalletService {
	rpc: Arc<RpcClient>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct TokenBalancesResult {
	#[serde(default)]
	token_balances: Vec<TokenBalanceEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenBalanceEntry {
	contract_address: String,
	#[serde(default)]
	token_balance: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct TokenMetadata {
	symbol: Option<String>,
	decimals: Option<u8>,
}

/// Lowercase-normalize and validate a 20-byte hex address.
fn normalize_address(raw: &str) -> Result<String, WalletError> {
	let address = raw.trim().to_lowercase();
	match address.strip_prefix("0x") {
		Some(hex) if hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()) => Ok(address),
		_ => Err(WalletError::InvalidAddress),
	}
}

impl WalletService {
	pub fn new(rpc: Arc<RpcClient>) -> Self {
		Self { rpc }
	}

	pub async fn overview(&self, address: &str) -> Result<WalletOverview, WalletError> {
		let address = normalize_address(address)?;

		let native_balance_eth = match self.native_balance(&address).await {
			Ok(balance) => balance,
			Err(err) => {
				warn!(%address, error = %err, "native balance lookup failed");
				"0".to_string()
			},
		};

		let token_balances = match self.token_balances(&address).await {
			Ok(balances) => balances,
			Err(err) => {
				warn!(%address, error = %err, "token balance enumeration failed");
				Vec::new()
			},
		};

		Ok(WalletOverview {
			address,
			native_balance_eth,
			token_balances,
			// Position discovery is not implemented; deliberately empty.
			open_positions: Vec::new(),
			source: WALLET_SOURCE.to_string(),
		})
	}

	async fn native_balance(&self, address: &str) -> Result<String, WalletError> {
		let result = self
			.rpc
			.call("eth_getBalance", json!([address, "latest"]))
			.await?;
		let hex = result.as_str().unwrap_or("0x0");
		Ok(format_units(hex, NATIVE_DECIMALS)?)
	}

	/// Enumerate non-zero token balances and resolve their metadata, with
	/// the per-token metadata lookups in flight concurrently.
	async fn token_balances(&self, address: &str) -> Result<Vec<TokenBalance>, WalletError> {
		let result = self
			.rpc
			.call("alchemy_getTokenBalances", json!([address]))
			.await?;
		let parsed: TokenBalancesResult = serde_json::from_value(result).unwrap_or_default();

		let lookups = parsed
			.token_balances
			.into_iter()
			.filter_map(|entry| {
				let raw_balance = entry.token_balance.clone()?;
				if raw_balance == "0x0" || raw_balance.is_empty() {
					return None;
				}
				Some(self.lookup_token(entry.contract_address, raw_balance))
			})
			.collect::<Vec<_>>();

		let resolved: Result<Vec<Option<TokenBalance>>, WalletError> =
			join_all(lookups).await.into_iter().collect();

		Ok(resolved?.into_iter().flatten().collect())
	}

	async fn lookup_token(
		&self,
		contract_address: String,
		raw_balance: String,
	) -> Result<Option<TokenBalance>, WalletError> {
		let result = self
			.rpc
			.call("alchemy_getTokenMetadata", json!([contract_address]))
			.await?;
		let metadata: TokenMetadata = serde_json::from_value(result).unwrap_or_default();

		// Tokens outside the supported set are skipped, not errors
		let symbol = match metadata
			.symbol
			.and_then(|s| s.parse::<TokenSymbol>().ok())
		{
			Some(symbol) => symbol,
			None => return Ok(None),
		};

		let decimals = metadata.decimals.unwrap_or(NATIVE_DECIMALS);
		let balance = format_units(&raw_balance, decimals)?;

		Ok(Some(TokenBalance {
			symbol,
			balance,
			raw_balance,
			decimals,
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mockito::{Matcher, Server};
	use serde_json::json;

	const ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

	fn rpc_for(server: &Server) -> Arc<RpcClient> {
		Arc::new(RpcClient::new(reqwest::Client::new(), vec![server.url()]))
	}

	#[test]
	fn test_address_normalization() {
		assert_eq!(
			normalize_address(" 0xF39Fd6e51aad88F6F4ce6aB8827279cffFb92266 ").unwrap(),
			ADDRESS
		);
		assert!(matches!(
			normalize_address("0xZZZZd6e51aad88f6f4ce6ab8827279cfffb92266"),
			Err(WalletError::InvalidAddress)
		));
		assert!(normalize_address("0x1234").is_err());
		assert!(normalize_address("f39fd6e51aad88f6f4ce6ab8827279cfffb92266").is_err());
	}

	#[tokio::test]
	async fn test_overview_with_tokens() {
		let mut server = Server::new_async().await;
		server
			.mock("POST", "/")
			.match_body(Matcher::PartialJson(json!({"method": "eth_getBalance"})))
			.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x14d1120d7b160000"}"#)
			.create_async()
			.await;
		server
			.mock("POST", "/")
			.match_body(Matcher::PartialJson(
				json!({"method": "alchemy_getTokenBalances"}),
			))
			.with_body(
				r#"{"jsonrpc":"2.0","id":1,"result":{"tokenBalances":[
					{"contractAddress":"0xusdc","tokenBalance":"0xf4240"},
					{"contractAddress":"0xzero","tokenBalance":"0x0"}
				]}}"#,
			)
			.create_async()
			.await;
		server
			.mock("POST", "/")
			.match_body(Matcher::PartialJson(
				json!({"method": "alchemy_getTokenMetadata", "params": ["0xusdc"]}),
			))
			.with_body(r#"{"jsonrpc":"2.0","id":1,"result":{"symbol":"usdc","decimals":6}}"#)
			.create_async()
			.await;

		let overview = WalletService::new(rpc_for(&server))
			.overview(ADDRESS)
			.await
			.unwrap();

		assert_eq!(overview.address, ADDRESS);
		assert_eq!(overview.native_balance_eth, "1.5");
		assert_eq!(overview.token_balances.len(), 1);
		assert_eq!(overview.token_balances[0].symbol, TokenSymbol::Usdc);
		assert_eq!(overview.token_balances[0].balance, "1");
		assert_eq!(overview.token_balances[0].raw_balance, "0xf4240");
		assert_eq!(overview.token_balances[0].decimals, 6);
		assert!(overview.open_positions.is_empty());
		assert_eq!(overview.source, WALLET_SOURCE);
	}

	#[tokio::test]
	async fn test_enumeration_failure_degrades_to_empty_list() {
		let mut server = Server::new_async().await;
		server
			.mock("POST", "/")
			.match_body(Matcher::PartialJson(json!({"method": "eth_getBalance"})))
			.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x14d1120d7b160000"}"#)
			.create_async()
			.await;
		server
			.mock("POST", "/")
			.match_body(Matcher::PartialJson(
				json!({"method": "alchemy_getTokenBalances"}),
			))
			.with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"message":"method not supported"}}"#)
			.create_async()
			.await;

		let overview = WalletService::new(rpc_for(&server))
			.overview(ADDRESS)
			.await
			.unwrap();

		assert_eq!(overview.native_balance_eth, "1.5");
		assert!(overview.token_balances.is_empty());
	}

	#[tokio::test]
	async fn test_all_lookups_failing_still_returns_overview() {
		// No RPC endpoints at all: both stages degrade, overview survives
		let rpc = Arc::new(RpcClient::new(reqwest::Client::new(), Vec::new()));
		let overview = WalletService::new(rpc).overview(ADDRESS).await.unwrap();

		assert_eq!(overview.native_balance_eth, "0");
		assert!(overview.token_balances.is_empty());
	}

	#[tokio::test]
	async fn test_unsupported_tokens_are_filtered() {
		let mut server = Server::new_async().await;
		server
			.mock("POST", "/")
			.match_body(Matcher::PartialJson(json!({"method": "eth_getBalance"})))
			.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x0"}"#)
			.create_async()
			.await;
		server
			.mock("POST", "/")
			.match_body(Matcher::PartialJson(
				json!({"method": "alchemy_getTokenBalances"}),
			))
			.with_body(
				r#"{"jsonrpc":"2.0","id":1,"result":{"tokenBalances":[
					{"contractAddress":"0xshib","tokenBalance":"0xf4240"}
				]}}"#,
			)
			.create_async()
			.await;
		server
			.mock("POST", "/")
			.match_body(Matcher::PartialJson(
				json!({"method": "alchemy_getTokenMetadata"}),
			))
			.with_body(r#"{"jsonrpc":"2.0","id":1,"result":{"symbol":"SHIB","decimals":18}}"#)
			.create_async()
			.await;

		let overview = WalletService::new(rpc_for(&server))
			.overview(ADDRESS)
			.await
			.unwrap();
		assert!(overview.token_balances.is_empty());
	}
}
