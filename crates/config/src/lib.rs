//! Gateway Config
//!
//! Settings structures and the file + environment loader.

pub mod loader;
pub mod settings;

pub use loader::load_config;
pub use settings::{
	AssetSettings, CredentialSettings, LogFormat, LoggingSettings, RpcSettings, ServerSettings,
	Settings, TimeoutSettings, PUBLIC_UNICHAIN_RPC_FALLBACKS,
};
