//! Configuration-backed token catalog implementation.
//!
//! Wraps the token table from validated configuration. A token is listed
//! for a chain pair when the pair is the configured hub/verse pair (in
//! either order) and the token is deployed on both sides; the native
//! asset is always listed.

use std::collections::HashSet;

use crate::{CatalogError, CatalogInterface};
use bridge_types::{ChainId, TokenConfig, TokenId};

/// Token catalog backed by the configured token table.
pub struct ConfigCatalog {
	/// Ordered token table; index is the token id.
	tokens: Vec<TokenConfig>,
	/// Chain id of the hub layer.
	hub_chain_id: ChainId,
	/// Chain id of the verse.
	verse_chain_id: ChainId,
}

impl ConfigCatalog {
	/// Creates a catalog over an ordered token table for one chain pair.
	pub fn new(tokens: Vec<TokenConfig>, hub_chain_id: ChainId, verse_chain_id: ChainId) -> Self {
		Self {
			tokens,
			hub_chain_id,
			verse_chain_id,
		}
	}

	/// True if `source`/`dest` is the configured pair, in either order.
	fn serves_pair(&self, source: ChainId, dest: ChainId) -> bool {
		(source == self.hub_chain_id && dest == self.verse_chain_id)
			|| (source == self.verse_chain_id && dest == self.hub_chain_id)
	}
}

impl CatalogInterface for ConfigCatalog {
	fn list_tokens(
		&self,
		source: ChainId,
		dest: ChainId,
		excluding: &HashSet<TokenId>,
	) -> Vec<TokenId> {
		if !self.serves_pair(source, dest) {
			return Vec::new();
		}
		self.tokens
			.iter()
			.enumerate()
			.filter(|(_, token)| token.is_bridgeable())
			.map(|(i, _)| TokenId(i as u16))
			.filter(|id| !excluding.contains(id))
			.collect()
	}

	fn token_info(&self, token: TokenId) -> Result<TokenConfig, CatalogError> {
		self.tokens
			.get(token.0 as usize)
			.cloned()
			.ok_or(CatalogError::UnknownToken(token))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const HUB: ChainId = 248;
	const VERSE: ChainId = 19011;

	fn erc20(symbol: &str, decimals: u8) -> TokenConfig {
		TokenConfig {
			symbol: symbol.to_string(),
			decimals,
			icon: None,
			exclude_on_deposit: false,
			hub_address: Some(bridge_types::Address(vec![0x11; 20])),
			verse_address: Some(bridge_types::Address(vec![0x22; 20])),
		}
	}

	fn catalog() -> ConfigCatalog {
		let native = TokenConfig {
			symbol: "OAS".to_string(),
			decimals: 18,
			icon: None,
			exclude_on_deposit: false,
			hub_address: None,
			verse_address: None,
		};
		let mut legacy = erc20("USDC.e (legacy)", 6);
		legacy.exclude_on_deposit = true;
		ConfigCatalog::new(vec![native, erc20("USDC.e", 6), legacy], HUB, VERSE)
	}

	#[test]
	fn test_list_tokens_ordered_and_stable() {
		let catalog = catalog();
		let none = HashSet::new();
		let listed = catalog.list_tokens(HUB, VERSE, &none);
		assert_eq!(listed, vec![TokenId(0), TokenId(1), TokenId(2)]);
		// Same pair in the other order enumerates identically.
		assert_eq!(catalog.list_tokens(VERSE, HUB, &none), listed);
	}

	#[test]
	fn test_list_tokens_exclusion_is_exact() {
		let catalog = catalog();
		let excluding = HashSet::from([TokenId(2)]);
		assert_eq!(
			catalog.list_tokens(HUB, VERSE, &excluding),
			vec![TokenId(0), TokenId(1)]
		);
	}

	#[test]
	fn test_list_tokens_unknown_pair_is_empty() {
		let catalog = catalog();
		let none = HashSet::new();
		assert!(catalog.list_tokens(HUB, 1, &none).is_empty());
	}

	#[test]
	fn test_token_info() {
		let catalog = catalog();
		let info = catalog.token_info(TokenId(1)).unwrap();
		assert_eq!(info.symbol, "USDC.e");
		assert_eq!(info.decimals, 6);
		assert_eq!(
			catalog.token_info(TokenId(9)),
			Err(CatalogError::UnknownToken(TokenId(9)))
		);
	}
}
