//! Configuration module for the verse bridge core.
//!
//! Configuration is loaded once from a TOML file at startup, optionally
//! overridden from the environment, validated, and then passed around as an
//! immutable value. Nothing in the core reads ambient global state.
//!
//! A minimal configuration names the verse chain, the two network entries,
//! and the ordered token table:
//!
//! ```toml
//! [bridge]
//! verse_chain_id = 19011
//!
//! [networks.248]
//! name = "Oasys Mainnet"
//!
//! [networks.19011]
//! name = "Home Verse"
//!
//! [[tokens]]
//! symbol = "OAS"
//! decimals = 18
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use bridge_types::{deserialize_networks, ChainId, NetworksConfig, TokenConfig, TokenId, HUB_CHAIN_ID};

/// Environment variable overriding the configured verse chain id.
///
/// Mirrors the deployment practice of selecting the verse per environment
/// rather than per config file.
pub const VERSE_CHAIN_ID_ENV: &str = "BRIDGE_VERSE_CHAIN_ID";

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		ConfigError::Parse(err.message().to_string())
	}
}

/// Main configuration structure for the bridge core.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Chain pair and bridge revision settings.
	pub bridge: BridgeConfig,
	/// Network display metadata, keyed by chain id.
	#[serde(deserialize_with = "deserialize_networks")]
	pub networks: NetworksConfig,
	/// Ordered table of bridgeable tokens. A token's index in this table
	/// is its [`TokenId`]; the first entry must be the native asset.
	pub tokens: Vec<TokenConfig>,
}

/// Chain pair and bridge revision settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BridgeConfig {
	/// Chain id of the hub layer.
	#[serde(default = "default_hub_chain_id")]
	pub hub_chain_id: ChainId,
	/// Chain id of the verse (layer 2).
	pub verse_chain_id: ChainId,
	/// Bridge contract revision on the verse side (0 or 1).
	#[serde(default)]
	pub verse_version: u8,
}

fn default_hub_chain_id() -> ChainId {
	HUB_CHAIN_ID
}

impl Config {
	/// Loads configuration from a TOML file, applies environment
	/// overrides, and validates the result.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		let contents = std::fs::read_to_string(path)?;
		let mut config: Config = toml::from_str(&contents)?;
		config.apply_env_overrides()?;
		config.validate()?;
		Ok(config)
	}

	/// Applies environment variable overrides to the parsed configuration.
	pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
		if let Ok(raw) = std::env::var(VERSE_CHAIN_ID_ENV) {
			let chain_id = raw.parse::<ChainId>().map_err(|e| {
				ConfigError::Validation(format!(
					"{} must be a chain id, got '{}': {}",
					VERSE_CHAIN_ID_ENV, raw, e
				))
			})?;
			debug!(chain_id, "verse chain id overridden from environment");
			self.bridge.verse_chain_id = chain_id;
		}
		Ok(())
	}

	/// Validates the configuration after parsing.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.bridge.verse_chain_id == self.bridge.hub_chain_id {
			return Err(ConfigError::Validation(
				"verse_chain_id must differ from hub_chain_id".into(),
			));
		}
		if self.bridge.verse_version > 1 {
			return Err(ConfigError::Validation(format!(
				"verse_version must be 0 or 1, got {}",
				self.bridge.verse_version
			)));
		}
		for chain_id in [self.bridge.hub_chain_id, self.bridge.verse_chain_id] {
			if !self.networks.contains_key(&chain_id) {
				return Err(ConfigError::Validation(format!(
					"no [networks.{}] entry for configured chain",
					chain_id
				)));
			}
		}
		if self.tokens.is_empty() {
			return Err(ConfigError::Validation("token table is empty".into()));
		}
		if !self.tokens[0].is_native() {
			return Err(ConfigError::Validation(
				"first token table entry must be the native asset".into(),
			));
		}
		for token in &self.tokens {
			if !token.is_bridgeable() {
				return Err(ConfigError::Validation(format!(
					"token '{}' needs addresses on both sides of the bridge",
					token.symbol
				)));
			}
		}
		Ok(())
	}

	/// Tokens that cannot be selected while the direction is deposit.
	pub fn deposit_exclusions(&self) -> HashSet<TokenId> {
		self.tokens
			.iter()
			.enumerate()
			.filter(|(_, t)| t.exclude_on_deposit)
			.map(|(i, _)| TokenId(i as u16))
			.collect()
	}

	/// Looks up a token id by display symbol (exact match).
	pub fn token_by_symbol(&self, symbol: &str) -> Option<TokenId> {
		self.tokens
			.iter()
			.position(|t| t.symbol == symbol)
			.map(|i| TokenId(i as u16))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	const EXAMPLE: &str = r#"
		[bridge]
		verse_chain_id = 19011
		verse_version = 1

		[networks.248]
		name = "Oasys Mainnet"

		[networks.19011]
		name = "Home Verse"

		[[tokens]]
		symbol = "OAS"
		decimals = 18

		[[tokens]]
		symbol = "USDC.e"
		decimals = 6
		hub_address = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
		verse_address = "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512"

		[[tokens]]
		symbol = "USDC.e (legacy)"
		decimals = 6
		exclude_on_deposit = true
		hub_address = "0x9fe46736679d2d9a65f0992f2272de9f3c7fa6e0"
		verse_address = "0xcf7ed3acca5a467e9e704c703e8d87f634fb0fc9"
	"#;

	fn example_config() -> Config {
		let mut config: Config = toml::from_str(EXAMPLE).unwrap();
		config.validate().unwrap();
		config
	}

	#[test]
	fn test_parse_example() {
		let config = example_config();
		assert_eq!(config.bridge.hub_chain_id, HUB_CHAIN_ID);
		assert_eq!(config.bridge.verse_chain_id, 19011);
		assert_eq!(config.bridge.verse_version, 1);
		assert_eq!(config.networks[&248].name, "Oasys Mainnet");
		assert_eq!(config.tokens.len(), 3);
		assert_eq!(config.deposit_exclusions(), HashSet::from([TokenId(2)]));
		assert_eq!(config.token_by_symbol("USDC.e"), Some(TokenId(1)));
		assert_eq!(config.token_by_symbol("DOGE"), None);
	}

	#[test]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(EXAMPLE.as_bytes()).unwrap();
		let config = Config::from_file(file.path()).unwrap();
		assert_eq!(config.bridge.verse_chain_id, 19011);
	}

	#[test]
	fn test_rejects_missing_network_entry() {
		let mut config = example_config();
		config.networks.remove(&19011);
		assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_rejects_same_chain_pair() {
		let mut config = example_config();
		config.bridge.verse_chain_id = config.bridge.hub_chain_id;
		assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_rejects_non_native_first_token() {
		let mut config = example_config();
		config.tokens.swap(0, 1);
		assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_rejects_half_deployed_token() {
		let mut config = example_config();
		config.tokens[1].verse_address = None;
		assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_env_override() {
		let mut config = example_config();
		std::env::set_var(VERSE_CHAIN_ID_ENV, "29548");
		let result = config.apply_env_overrides();
		std::env::remove_var(VERSE_CHAIN_ID_ENV);
		result.unwrap();
		assert_eq!(config.bridge.verse_chain_id, 29548);
	}
}
