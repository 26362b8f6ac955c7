//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, File};

/// Load configuration from the optional config file, then overlay the
/// environment variables recognized by the gateway.
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	let mut settings: Settings = s.try_deserialize()?;
	settings.apply_env_overrides();
	Ok(settings)
}
