//! Configuration settings structures

use serde::{Deserialize, Serialize};

/// Public RPC endpoints tried after the configured providers.
pub const PUBLIC_UNICHAIN_RPC_FALLBACKS: [&str; 2] = [
	"https://unichain-sepolia-rpc.publicnode.com",
	"https://rpc.ankr.com/unichain_testnet",
];

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub rpc: RpcSettings,
	pub credentials: CredentialSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
	pub assets: AssetSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

/// Chain RPC provider configuration, ranked by priority.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RpcSettings {
	/// Primary provider endpoint (Alchemy), if provisioned.
	pub alchemy_url: Option<String>,
	/// Secondary provider endpoint (Goldsky), if provisioned.
	pub goldsky_url: Option<String>,
	/// Public fallbacks tried after the configured providers.
	pub public_fallbacks: Vec<String>,
}

impl Default for RpcSettings {
	fn default() -> Self {
		Self {
			alchemy_url: None,
			goldsky_url: None,
			public_fallbacks: PUBLIC_UNICHAIN_RPC_FALLBACKS
				.iter()
				.map(|url| url.to_string())
				.collect(),
		}
	}
}

/// Third-party API credentials. Each one is optional; an absent credential
/// degrades the corresponding adapter instead of failing startup.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CredentialSettings {
	pub coingecko_api_key: Option<String>,
	pub graph_api_key: Option<String>,
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Timeout applied to every outbound HTTP request.
	pub request_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self { request_ms: 5_000 }
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
		}
	}
}

/// Log output formats
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Static asset serving configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AssetSettings {
	/// Directory served for all non-API paths.
	pub dir: String,
}

impl Default for AssetSettings {
	fn default() -> Self {
		Self {
			dir: "dist".to_string(),
		}
	}
}

impl Settings {
	/// Socket address string the server binds to
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Prioritized, de-duplicated RPC endpoint list: explicit primary
	/// provider, then secondary, then the public fallbacks.
	pub fn rpc_endpoints(&self) -> Vec<String> {
		let mut endpoints = Vec::new();
		let candidates = self
			.rpc
			.alchemy_url
			.iter()
			.chain(self.rpc.goldsky_url.iter())
			.chain(self.rpc.public_fallbacks.iter());

		for candidate in candidates {
			let url = candidate.trim();
			if !url.is_empty() && !endpoints.iter().any(|existing| existing == url) {
				endpoints.push(url.to_string());
			}
		}

		endpoints
	}

	/// Overlay the deployment environment variables recognized by the
	/// gateway on top of file-based configuration.
	pub fn apply_env_overrides(&mut self) {
		if let Ok(value) = std::env::var("ALCHEMY_UNICHAIN_URL") {
			self.rpc.alchemy_url = Some(value);
		}
		if let Ok(value) = std::env::var("GOLDSKY_RPC_URL") {
			self.rpc.goldsky_url = Some(value);
		}
		if let Ok(value) = std::env::var("COINGECKO_API_KEY") {
			self.credentials.coingecko_api_key = Some(value);
		}
		if let Ok(value) = std::env::var("GRAPH_API_KEY") {
			self.credentials.graph_api_key = Some(value);
		}
		if let Ok(value) = std::env::var("PORT") {
			if let Ok(port) = value.parse() {
				self.server.port = port;
			}
		}
	}
}
