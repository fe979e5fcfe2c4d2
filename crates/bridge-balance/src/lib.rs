//! Balance source module for the verse bridge core.
//!
//! Balances are best-effort, latest-value snapshots of on-chain state.
//! The bridge core only ever reads them to prefill the amount input
//! ("max") and to hand a presentation layer something to display; it
//! never bases correctness on them, so staleness is acceptable and a
//! surrounding poller (out of scope here) owns the refresh cadence.

use async_trait::async_trait;

use bridge_types::{ChainId, TokenId};

/// Re-export implementations
pub mod implementations {
	pub mod memory;
}

pub use implementations::memory::MemoryBalances;

/// Trait defining the interface for balance source implementations.
///
/// Lookups are infallible by contract: an implementation that cannot
/// answer (unknown pair, RPC trouble) reports the sentinel `"0"` rather
/// than an error, logging the cause itself if it has one.
#[async_trait]
#[cfg_attr(feature = "testing", mockall::automock)]
pub trait BalanceInterface: Send + Sync {
	/// Returns the balance of `token` on `chain` as a decimal string.
	async fn balance(&self, chain: ChainId, token: TokenId) -> String;
}

/// The sentinel balance reported for pairs the source knows nothing about.
pub const ZERO_BALANCE: &str = "0";
