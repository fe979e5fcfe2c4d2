//! Network and token configuration types.
//!
//! The bridge spans exactly two networks: the hub layer and one verse
//! (layer 2). Tokens are configured as a single ordered table of logical
//! assets bridgeable between the pair; a token's position in that table is
//! its identity for the lifetime of the process.

use crate::transfer::Address;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Chain identifier, as used on-chain (EIP-155 style).
pub type ChainId = u64;

/// Chain id of the Oasys hub layer.
pub const HUB_CHAIN_ID: ChainId = 248;

/// Opaque identifier for a bridgeable token.
///
/// Wraps the token's index in the configured token table. Identity is
/// stable across direction toggles, which is what lets the core retain
/// the user's selection when it is still available after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub u16);

impl TokenId {
	/// The canonical native asset (always the first table entry).
	pub const NATIVE: TokenId = TokenId(0);
}

impl std::fmt::Display for TokenId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "token#{}", self.0)
	}
}

/// Configuration for one logical bridgeable token.
///
/// # Fields
///
/// * `symbol` - Display symbol (e.g. "OAS", "USDC.e")
/// * `decimals` - Number of fractional digits the smallest unit supports
/// * `icon` - Optional icon reference for presentation layers
/// * `exclude_on_deposit` - Token cannot be selected while depositing
///   (set for legacy-wrapped variants that can only be withdrawn)
/// * `hub_address` / `verse_address` - Contract addresses on each side;
///   both absent for the native asset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenConfig {
	pub symbol: String,
	pub decimals: u8,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	#[serde(default)]
	pub exclude_on_deposit: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hub_address: Option<Address>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub verse_address: Option<Address>,
}

impl TokenConfig {
	/// True if the token is the native asset (no contract on either side).
	pub fn is_native(&self) -> bool {
		self.hub_address.is_none() && self.verse_address.is_none()
	}

	/// True if the token can be moved between the given chain pair.
	///
	/// The native asset exists everywhere; a wrapped token needs a
	/// contract deployed on both sides of the pair.
	pub fn is_bridgeable(&self) -> bool {
		self.is_native() || (self.hub_address.is_some() && self.verse_address.is_some())
	}
}

/// Configuration for a single network.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
	/// Human-readable chain name (e.g. "Oasys Mainnet").
	pub name: String,
	/// Optional icon reference for presentation layers.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
}

/// Map of chain IDs to network configurations.
pub type NetworksConfig = HashMap<ChainId, NetworkConfig>;

/// Custom deserializer for networks that converts string keys to u64 chain IDs.
///
/// TOML table keys are always strings; network sections are written as
/// `[networks.248]` and need their keys parsed into numeric chain IDs.
pub fn deserialize_networks<'de, D>(deserializer: D) -> Result<NetworksConfig, D::Error>
where
	D: Deserializer<'de>,
{
	let string_map: HashMap<String, NetworkConfig> = HashMap::deserialize(deserializer)?;
	let mut result = HashMap::new();

	for (key, value) in string_map {
		let chain_id = key
			.parse::<u64>()
			.map_err(|e| serde::de::Error::custom(format!("Invalid chain_id '{}': {}", key, e)))?;
		result.insert(chain_id, value);
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn addr(hex_str: &str) -> Address {
		Address(hex::decode(hex_str.trim_start_matches("0x")).unwrap())
	}

	#[test]
	fn test_token_config_bridgeable() {
		let native = TokenConfig {
			symbol: "OAS".to_string(),
			decimals: 18,
			icon: None,
			exclude_on_deposit: false,
			hub_address: None,
			verse_address: None,
		};
		assert!(native.is_native());
		assert!(native.is_bridgeable());

		let both_sides = TokenConfig {
			symbol: "USDC.e".to_string(),
			decimals: 6,
			icon: None,
			exclude_on_deposit: false,
			hub_address: Some(addr("0x5fbdb2315678afecb367f032d93f642f64180aa3")),
			verse_address: Some(addr("0xe7f1725e7734ce288f8367e1bb143e90bb3f0512")),
		};
		assert!(!both_sides.is_native());
		assert!(both_sides.is_bridgeable());

		let one_side = TokenConfig {
			verse_address: None,
			..both_sides
		};
		assert!(!one_side.is_native());
		assert!(!one_side.is_bridgeable());
	}

	#[test]
	fn test_token_config_toml_defaults() {
		let token: TokenConfig = toml::from_str(
			r#"
			symbol = "OAS"
			decimals = 18
			"#,
		)
		.unwrap();
		assert_eq!(token.symbol, "OAS");
		assert_eq!(token.decimals, 18);
		assert!(!token.exclude_on_deposit);
		assert!(token.is_native());
	}
}
