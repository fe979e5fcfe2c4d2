//! Mock transfer delivery implementation.
//!
//! Produces deterministic transaction hashes without touching a chain.
//! Used by tests and the demo service; it can be primed to fail so
//! callers can exercise their error relay paths.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use crate::{DeliveryError, DeliveryInterface};
use bridge_types::{TransactionHash, TransferRequest};

/// Delivery implementation that fabricates transaction hashes.
pub struct MockBridgeDelivery {
	/// Verse bridge contract revision this delivery targets.
	verse_version: u8,
	/// Monotonic counter folded into each fabricated hash.
	sequence: AtomicU64,
	/// When set, every submission fails with this message.
	fail_with: Option<String>,
}

impl MockBridgeDelivery {
	/// Creates a mock delivery for the given verse bridge revision.
	pub fn new(verse_version: u8) -> Self {
		Self {
			verse_version,
			sequence: AtomicU64::new(0),
			fail_with: None,
		}
	}

	/// Makes every subsequent submission fail with `reason`.
	pub fn failing(verse_version: u8, reason: impl Into<String>) -> Self {
		Self {
			fail_with: Some(reason.into()),
			..Self::new(verse_version)
		}
	}
}

#[async_trait]
impl DeliveryInterface for MockBridgeDelivery {
	async fn submit(&self, request: &TransferRequest) -> Result<TransactionHash, DeliveryError> {
		if let Some(reason) = &self.fail_with {
			return Err(DeliveryError::TransferFailed(reason.clone()));
		}

		let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
		info!(
			direction = %request.direction,
			source_chain = request.source_chain,
			dest_chain = request.dest_chain,
			token = %request.token,
			amount = %request.amount,
			verse_version = self.verse_version,
			"mock bridge transfer submitted"
		);

		// 32 bytes: version, sequence, then the source chain id, so hashes
		// are unique per submission and recognizable in logs.
		let mut hash = vec![0u8; 32];
		hash[0] = self.verse_version;
		hash[1..9].copy_from_slice(&seq.to_be_bytes());
		hash[9..17].copy_from_slice(&request.source_chain.to_be_bytes());
		Ok(TransactionHash(hash))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bridge_types::Direction;

	fn request() -> TransferRequest {
		TransferRequest {
			direction: Direction::Deposit,
			source_chain: 248,
			dest_chain: 19011,
			token: bridge_types::TokenId(0),
			amount: "1.5".to_string(),
		}
	}

	#[tokio::test]
	async fn test_submit_yields_unique_hashes() {
		let delivery = MockBridgeDelivery::new(1);
		let first = delivery.submit(&request()).await.unwrap();
		let second = delivery.submit(&request()).await.unwrap();
		assert_ne!(first, second);
		assert_eq!(first.0.len(), 32);
	}

	#[tokio::test]
	async fn test_primed_failure_is_relayed() {
		let delivery = MockBridgeDelivery::failing(0, "user rejected in wallet");
		let err = delivery.submit(&request()).await.unwrap_err();
		assert!(matches!(err, DeliveryError::TransferFailed(_)));
		assert!(err.to_string().contains("user rejected"));
	}
}
