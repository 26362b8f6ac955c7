//! Quote resolution with ordered fallback
//!
//! Sources are tried strictly in priority order, never concurrently: each
//! chain's subgraph candidates first, then the CoinGecko spot index. The
//! first success wins; subgraph failures are collected and surfaced as
//! `fallback_reason` when the quote came from the off-chain index.

use chrono::Utc;
use gateway_adapters::{candidates_for, CoinGeckoAdapter, SubgraphAdapter, COINGECKO_SOURCE};
use gateway_types::{Chain, QuoteError, RouteStatus, SwapQuote, TokenSymbol};
use tracing::{info, warn};

pub struct QuoteService {
	subgraph: SubgraphAdapter,
	coingecko: CoinGeckoAdapter,
}

impl QuoteService {
	pub fn new(subgraph: SubgraphAdapter, coingecko: CoinGeckoAdapter) -> Self {
		Self { subgraph, coingecko }
	}

	/// Resolve a swap quote. Fails only when every source in the chain has
	/// failed; the error then carries the last (CoinGecko) failure.
	pub async fn resolve(
		&self,
		from: TokenSymbol,
		to: TokenSymbol,
		chain: Chain,
		amount_in: Option<&str>,
	) -> Result<SwapQuote, QuoteError> {
		let mut failures = Vec::new();
		let mut resolved: Option<(f64, &'static str)> = None;

		for candidate in candidates_for(chain) {
			match self.subgraph.derived_rate(from, to, chain, candidate).await {
				Ok(rate) => {
					resolved = Some((rate, candidate.source));
					break;
				},
				Err(err) => {
					warn!(source = candidate.source, error = %err, "subgraph quote source failed");
					failures.push(err.to_string());
				},
			}
		}

		let (rate, source, route_status, fallback_reason) = match resolved {
			Some((rate, source)) => (rate, source.to_string(), RouteStatus::Live, None),
			None => {
				let reason = format!(
					"All Uniswap subgraph quote sources failed: {}",
					failures.join(" | ")
				);
				let rate = self.coingecko.spot_rate(from, to).await?;
				(
					rate,
					COINGECKO_SOURCE.to_string(),
					RouteStatus::Skeleton,
					Some(reason),
				)
			},
		};

		if !rate.is_finite() || rate <= 0.0 {
			return Err(QuoteError::InvalidRate { source_name: source });
		}

		let amount_out = amount_in
			.and_then(|raw| raw.trim().parse::<f64>().ok())
			.filter(|amount| amount.is_finite() && *amount > 0.0)
			.map(|amount| format!("{:.6}", amount * rate));

		info!(%from, %to, %chain, rate, source, ?route_status, "quote resolved");

		Ok(SwapQuote {
			from_token: from,
			to_token: to,
			chain,
			rate,
			amount_out,
			source,
			timestamp: Utc::now(),
			route_status,
			fallback_reason,
		})
	}
}
