//! In-memory balance source implementation.
//!
//! Holds balances in a map keyed by (chain, token). Intended for tests
//! and demos; a production source would sit on top of RPC queries and a
//! refresh poller, behind the same interface.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::{BalanceInterface, ZERO_BALANCE};
use bridge_types::{ChainId, TokenId};

/// Balance source backed by an in-memory map.
pub struct MemoryBalances {
	balances: RwLock<HashMap<(ChainId, TokenId), String>>,
}

impl MemoryBalances {
	/// Creates an empty balance source; every lookup reports `"0"`.
	pub fn new() -> Self {
		Self {
			balances: RwLock::new(HashMap::new()),
		}
	}

	/// Records the balance snapshot for one (chain, token) pair.
	pub async fn set(&self, chain: ChainId, token: TokenId, balance: impl Into<String>) {
		self.balances
			.write()
			.await
			.insert((chain, token), balance.into());
	}
}

impl Default for MemoryBalances {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl BalanceInterface for MemoryBalances {
	async fn balance(&self, chain: ChainId, token: TokenId) -> String {
		self.balances
			.read()
			.await
			.get(&(chain, token))
			.cloned()
			.unwrap_or_else(|| ZERO_BALANCE.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_unknown_pair_reports_zero_sentinel() {
		let balances = MemoryBalances::new();
		assert_eq!(balances.balance(248, TokenId(0)).await, "0");
	}

	#[tokio::test]
	async fn test_set_then_read() {
		let balances = MemoryBalances::new();
		balances.set(248, TokenId(0), "42.5").await;
		assert_eq!(balances.balance(248, TokenId(0)).await, "42.5");
		// Other side of the bridge is still unknown.
		assert_eq!(balances.balance(19011, TokenId(0)).await, "0");
	}
}
