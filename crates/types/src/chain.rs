//! Supported chains and token symbols
//!
//! Both sets are closed: unknown strings are rejected at the API boundary
//! instead of flowing into the adapters as free-form text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chains the gateway can quote against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
	Unichain,
	Ethereum,
	Base,
}

impl Chain {
	pub const ALL: [Chain; 3] = [Chain::Unichain, Chain::Ethereum, Chain::Base];

	pub fn as_str(&self) -> &'static str {
		match self {
			Chain::Unichain => "unichain",
			Chain::Ethereum => "ethereum",
			Chain::Base => "base",
		}
	}
}

impl Default for Chain {
	fn default() -> Self {
		Chain::Unichain
	}
}

impl fmt::Display for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Error, Debug)]
#[error("Invalid chain. Supported: unichain, ethereum, base")]
pub struct ChainParseError;

impl FromStr for Chain {
	type Err = ChainParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"unichain" => Ok(Chain::Unichain),
			"ethereum" => Ok(Chain::Ethereum),
			"base" => Ok(Chain::Base),
			_ => Err(ChainParseError),
		}
	}
}

/// Token tickers the gateway quotes and reports balances for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenSymbol {
	Uni,
	Wbtc,
	Weth,
	Usdc,
	Usdt,
}

impl TokenSymbol {
	pub const ALL: [TokenSymbol; 5] = [
		TokenSymbol::Uni,
		TokenSymbol::Wbtc,
		TokenSymbol::Weth,
		TokenSymbol::Usdc,
		TokenSymbol::Usdt,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			TokenSymbol::Uni => "UNI",
			TokenSymbol::Wbtc => "WBTC",
			TokenSymbol::Weth => "WETH",
			TokenSymbol::Usdc => "USDC",
			TokenSymbol::Usdt => "USDT",
		}
	}

	/// CoinGecko coin id for this ticker
	pub fn coingecko_id(&self) -> &'static str {
		match self {
			TokenSymbol::Uni => "uniswap",
			TokenSymbol::Wbtc => "wrapped-bitcoin",
			TokenSymbol::Weth => "weth",
			TokenSymbol::Usdc => "usd-coin",
			TokenSymbol::Usdt => "tether",
		}
	}

	/// ERC-20 contract address of this token on the given chain
	pub fn address_on(&self, chain: Chain) -> &'static str {
		match chain {
			Chain::Unichain => match self {
				TokenSymbol::Uni => "0x8f187aa05619a017077f5308904739877ce9ea21",
				TokenSymbol::Wbtc => "0x9274a4f6e2147a3095f4d2a866f1f8f6d5c7c11b",
				TokenSymbol::Weth => "0x4200000000000000000000000000000000000006",
				TokenSymbol::Usdc => "0x31d0220469e10c4e71834a79b1f276d740d3768f",
				TokenSymbol::Usdt => "0x70262e266e50603AcFc5D58997eF73e5a8775844",
			},
			Chain::Ethereum => match self {
				TokenSymbol::Uni => "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984",
				TokenSymbol::Wbtc => "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599",
				TokenSymbol::Weth => "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
				TokenSymbol::Usdc => "0xA0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
				TokenSymbol::Usdt => "0xdac17f958d2ee523a2206206994597c13d831ec7",
			},
			Chain::Base => match self {
				TokenSymbol::Uni => "0x6d0f9a5f53f0f3f0439f2eb95c355f8810e3f4d0",
				TokenSymbol::Wbtc => "0x0555E30da8f98308EdB960aa94C0Db47230d2B9c",
				TokenSymbol::Weth => "0x4200000000000000000000000000000000000006",
				TokenSymbol::Usdc => "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
				TokenSymbol::Usdt => "0xfde4C96c8593536E31F229EA8f37b2ADa2699bb2",
			},
		}
	}
}

impl fmt::Display for TokenSymbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Error, Debug)]
#[error("Unsupported token symbol: {0}")]
pub struct SymbolParseError(pub String);

impl FromStr for TokenSymbol {
	type Err = SymbolParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_uppercase().as_str() {
			"UNI" => Ok(TokenSymbol::Uni),
			"WBTC" => Ok(TokenSymbol::Wbtc),
			"WETH" => Ok(TokenSymbol::Weth),
			"USDC" => Ok(TokenSymbol::Usdc),
			"USDT" => Ok(TokenSymbol::Usdt),
			_ => Err(SymbolParseError(s.to_string())),
		}
	}
}
