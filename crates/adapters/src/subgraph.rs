//! Uniswap subgraph adapters (The Graph gateway)
//!
//! On-chain price sources. A rate is derived from the reserve ratio of the
//! two tokens' `derivedETH` fields. Candidate subgraphs are chain-specific:
//! mainnet gets v4 with a v3 fallback, other chains only have v4.

use gateway_types::{AdapterError, Chain, TokenSymbol};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

pub const GRAPH_GATEWAY_BASE_URL: &str = "https://gateway.thegraph.com";

const UNISWAP_V4_MAINNET_SUBGRAPH_ID: &str = "DiYPVdygkfjDWhbxGSqAQxwBKmfKnkWQojqeM2rkLb3G";
const UNISWAP_V4_CHAIN_SUBGRAPH_ID: &str = "aa3YpPCxatg4LaBbLFuv2iBC8Jvs9u3hwt5GTpS4Kit";
const UNISWAP_V3_MAINNET_SUBGRAPH_ID: &str = "5zvR82QoaXYFyDEKLZ9t6v9adgnptxYpKpSbxtgVENFV";

pub const UNISWAP_V4_SOURCE: &str = "uniswap-v4-subgraph";
pub const UNISWAP_V3_SOURCE: &str = "uniswap-v3-subgraph";

const DERIVED_ETH_QUERY: &str = "\
	query QuotePrice($from: ID!, $to: ID!) {\
		fromToken: token(id: $from) { derivedETH }\
		toToken: token(id: $to) { derivedETH }\
	}";

/// One subgraph to try, paired with the source tag it reports under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubgraphCandidate {
	pub subgraph_id: &'static str,
	pub source: &'static str,
}

/// Subgraphs to try for a chain, in priority order.
pub fn candidates_for(chain: Chain) -> Vec<SubgraphCandidate> {
	match chain {
		Chain::Ethereum => vec![
			SubgraphCandidate {
				subgraph_id: UNISWAP_V4_MAINNET_SUBGRAPH_ID,
				source: UNISWAP_V4_SOURCE,
			},
			SubgraphCandidate {
				subgraph_id: UNISWAP_V3_MAINNET_SUBGRAPH_ID,
				source: UNISWAP_V3_SOURCE,
			},
		],
		Chain::Unichain | Chain::Base => vec![SubgraphCandidate {
			subgraph_id: UNISWAP_V4_CHAIN_SUBGRAPH_ID,
			source: UNISWAP_V4_SOURCE,
		}],
	}
}

#[derive(Debug, Clone)]
pub struct SubgraphAdapter {
	client: reqwest::Client,
	api_key: Option<String>,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct GraphResponse {
	data: Option<GraphData>,
	errors: Option<Vec<GraphErrorBody>>,
}

#[derive(Debug, Deserialize)]
struct GraphData {
	#[serde(rename = "fromToken")]
	from_token: Option<TokenNode>,
	#[serde(rename = "toToken")]
	to_token: Option<TokenNode>,
}

#[derive(Debug, Deserialize)]
struct TokenNode {
	#[serde(rename = "derivedETH")]
	derived_eth: Option<String>,
}

impl SubgraphAdapter {
	pub fn new(client: reqwest::Client, api_key: Option<String>) -> Self {
		Self::with_base_url(client, api_key, GRAPH_GATEWAY_BASE_URL)
	}

	/// Point the adapter at a different gateway host. Used by tests.
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

	/// Rate between two tokens on `chain` from one subgraph candidate:
	/// `derivedETH(from) / derivedETH(to)`.
	///
	/// A missing Graph API key is an explicit fast failure so the quote
	/// resolver can record it and move on to the next source.
	pub async fn derived_rate(
		&self,
		from: TokenSymbol,
		to: TokenSymbol,
		chain: Chain,
		candidate: SubgraphCandidate,
	) -> Result<f64, AdapterError> {
		let api_key = self
			.api_key
			.as_deref()
			.ok_or(AdapterError::MissingGraphKey)?;

		let endpoint = format!(
			"{}/api/{}/subgraphs/id/{}",
			self.base_url, api_key, candidate.subgraph_id
		);

		let body = json!({
			"query": DERIVED_ETH_QUERY,
			"variables": {
				"from": from.address_on(chain).to_lowercase(),
				"to": to.address_on(chain).to_lowercase(),
			},
		});

		let response = self
			.client
			.post(&endpoint)
			.header("accept", "application/json")
			.json(&body)
			.send()
			.await?;

		if !response.status().is_success() {
			let status = response.status().as_u16();
			let body = response.text().await.unwrap_or_default();
			return Err(AdapterError::UpstreamStatus {
				source_name: candidate.source.to_string(),
				status,
				body,
			});
		}

		let payload: GraphResponse = response.json().await?;

		if let Some(errors) = &payload.errors {
			if let Some(first) = errors.first() {
				return Err(AdapterError::Subgraph {
					source_name: candidate.source.to_string(),
					message: first
						.message
						.clone()
						.unwrap_or_else(|| "unknown subgraph error".to_string()),
				});
			}
		}

		let derived = |node: Option<&TokenNode>| {
			node.and_then(|token| token.derived_eth.as_ref())
				.and_then(|value| value.parse::<f64>().ok())
				.unwrap_or(f64::NAN)
		};

		let data = payload.data;
		let from_derived = derived(data.as_ref().and_then(|d| d.from_token.as_ref()));
		let to_derived = derived(data.as_ref().and_then(|d| d.to_token.as_ref()));

		if !from_derived.is_finite() || !to_derived.is_finite() || to_derived <= 0.0 {
			return Err(AdapterError::InvalidDerived {
				source_name: candidate.source.to_string(),
			});
		}

		debug!(
			%from, %to, %chain,
			source = candidate.source,
			from_derived, to_derived,
			"resolved subgraph derivedETH values"
		);
		Ok(from_derived / to_derived)
	}
}

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
	message: Option<String>,
}
