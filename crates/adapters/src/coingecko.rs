//! CoinGecko spot-price adapter
//!
//! Off-chain price index used as the last fallback in the quote chain.
//! Both USD prices come from a single batched request.

use std::collections::HashMap;

use gateway_types::{AdapterError, TokenSymbol};
use serde::Deserialize;
use tracing::debug;

pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";

/// Source tag reported on quotes resolved through this adapter.
pub const COINGECKO_SOURCE: &str = "coingecko-backend";

#[derive(Debug, Clone)]
pub struct CoinGeckoAdapter {
	client: reqwest::Client,
	api_key: Option<String>,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct UsdPrice {
	usd: Option<f64>,
}

impl CoinGeckoAdapter {
	pub fn new(client: reqwest::Client, api_key: Option<String>) -> Self {
		Self::with_base_url(client, api_key, COINGECKO_BASE_URL)
	}

	/// Point the adapter at a different host. Used by tests to stand in a
	/// local server for the real API.
	pub fn with_base_url(
		client: reqwest::Client,
		api_key: Option<String>,
		base_url: impl Into<String>,
	) -> Self {
		Self {
			client,
			api_key,
			base_url: base_url.into(),
		}
	}

	/// Spot exchange rate between two tickers, derived from their batched
	/// USD prices: `usd(from) / usd(to)`.
	pub async fn spot_rate(
		&self,
		from: TokenSymbol,
		to: TokenSymbol,
	) -> Result<f64, AdapterError> {
		let from_id = from.coingecko_id();
		let to_id = to.coingecko_id();

		let mut request = self
			.client
			.get(format!("{}/api/v3/simple/price", self.base_url))
			.header("accept", "application/json")
			.query(&[
				("ids", format!("{from_id},{to_id}")),
				("vs_currencies", "usd".to_string()),
			]);

		if let Some(key) = &self.api_key {
			request = request.query(&[("x_cg_demo_api_key", key)]);
		}

		let response = request.send().await?;

		if !response.status().is_success() {
			let status = response.status().as_u16();
			let body = response.text().await.unwrap_or_default();
			return Err(AdapterError::UpstreamStatus {
				source_name: "CoinGecko".to_string(),
				status,
				body,
			});
		}

		let payload: HashMap<String, UsdPrice> = response.json().await?;

		let price_of = |id: &str| {
			payload
				.get(id)
				.and_then(|price| price.usd)
				.filter(|usd| *usd > 0.0)
		};

		let from_price = price_of(from_id).ok_or(AdapterError::MissingUsdPrice)?;
		let to_price = price_of(to_id).ok_or(AdapterError::MissingUsdPrice)?;

		debug!(%from, %to, from_price, to_price, "resolved CoinGecko spot prices");
		Ok(from_price / to_price)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mockito::{Matcher, Server};

	#[tokio::test]
	async fn test_spot_rate_from_batched_usd_prices() {
		let mut server = Server::new_async().await;
		server
			.mock("GET", "/api/v3/simple/price")
			.match_query(Matcher::AllOf(vec![
				Matcher::UrlEncoded("ids".into(), "weth,usd-coin".into()),
				Matcher::UrlEncoded("vs_currencies".into(), "usd".into()),
			]))
			.with_body(r#"{"weth":{"usd":3000.0},"usd-coin":{"usd":1.0}}"#)
			.create_async()
			.await;

		let adapter =
			CoinGeckoAdapter::with_base_url(reqwest::Client::new(), None, server.url());
		let rate = adapter
			.spot_rate(TokenSymbol::Weth, TokenSymbol::Usdc)
			.await
			.unwrap();
		assert!((rate - 3000.0).abs() < f64::EPSILON);
	}

	#[tokio::test]
	async fn test_api_key_appended_when_configured() {
		let mut server = Server::new_async().await;
		let mock = server
			.mock("GET", "/api/v3/simple/price")
			.match_query(Matcher::UrlEncoded(
				"x_cg_demo_api_key".into(),
				"demo-key".into(),
			))
			.with_body(r#"{"uniswap":{"usd":10.0},"tether":{"usd":1.0}}"#)
			.create_async()
			.await;

		let adapter = CoinGeckoAdapter::with_base_url(
			reqwest::Client::new(),
			Some("demo-key".to_string()),
			server.url(),
		);
		adapter
			.spot_rate(TokenSymbol::Uni, TokenSymbol::Usdt)
			.await
			.unwrap();
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn test_missing_usd_price_is_an_error() {
		let mut server = Server::new_async().await;
		server
			.mock("GET", "/api/v3/simple/price")
			.match_query(Matcher::Any)
			.with_body(r#"{"weth":{"usd":3000.0}}"#)
			.create_async()
			.await;

		let adapter =
			CoinGeckoAdapter::with_base_url(reqwest::Client::new(), None, server.url());
		let err = adapter
			.spot_rate(TokenSymbol::Weth, TokenSymbol::Usdc)
			.await
			.unwrap_err();
		assert!(matches!(err, AdapterError::MissingUsdPrice));
	}

	#[tokio::test]
	async fn test_upstream_status_carries_body() {
		let mut server = Server::new_async().await;
		server
			.mock("GET", "/api/v3/simple/price")
			.match_query(Matcher::Any)
			.with_status(429)
			.with_body("rate limit exceeded")
			.create_async()
			.await;

		let adapter =
			CoinGeckoAdapter::with_base_url(reqwest::Client::new(), None, server.url());
		let err = adapter
			.spot_rate(TokenSymbol::Wbtc, TokenSymbol::Weth)
			.await
			.unwrap_err();
		assert_eq!(
			err.to_string(),
			"CoinGecko request failed (429): rate limit exceeded"
		);
	}
}
