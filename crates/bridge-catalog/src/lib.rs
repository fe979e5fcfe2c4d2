//! Token catalog module for the verse bridge core.
//!
//! The catalog answers two questions: which tokens can move between a
//! given chain pair, and what a given token looks like (symbol, decimal
//! precision, icon). It is the authority the core consults when the
//! transfer direction changes and the current selection may no longer be
//! available.
//!
//! Catalog implementations must be deterministic and side-effect-free:
//! the same inputs always enumerate the same tokens in the same order.

use std::collections::HashSet;
use thiserror::Error;

use bridge_config::Config;
use bridge_types::{ChainId, TokenConfig, TokenId};

/// Re-export implementations
pub mod implementations {
	pub mod config;
}

pub use implementations::config::ConfigCatalog;

/// Errors that can occur during catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
	/// The token id is outside the configured token table.
	#[error("Unknown token: {0}")]
	UnknownToken(TokenId),
}

/// Trait defining the interface for token catalog implementations.
///
/// Both operations are synchronous on purpose: the catalog is a pure
/// lookup over configuration fixed at startup, and the core depends on
/// its answers being stable within a session.
#[cfg_attr(feature = "testing", mockall::automock)]
pub trait CatalogInterface: Send + Sync {
	/// Enumerates the tokens bridgeable between `source` and `dest`,
	/// skipping any in `excluding`, in configured table order.
	fn list_tokens(
		&self,
		source: ChainId,
		dest: ChainId,
		excluding: &HashSet<TokenId>,
	) -> Vec<TokenId>;

	/// Returns the metadata for a token.
	fn token_info(&self, token: TokenId) -> Result<TokenConfig, CatalogError>;
}

/// Builds the configuration-backed catalog from validated configuration.
pub fn from_config(config: &Config) -> ConfigCatalog {
	ConfigCatalog::new(
		config.tokens.clone(),
		config.bridge.hub_chain_id,
		config.bridge.verse_chain_id,
	)
}
