//! Transfer delivery module for the verse bridge core.
//!
//! This module defines the seam between the bridge core and whatever
//! actually moves funds: a wallet-connected contract call in the real
//! application, a mock in tests. The core hands a fully validated
//! [`TransferRequest`] across this boundary and relays the outcome
//! without interpreting it; there are no retries at this layer.

use async_trait::async_trait;
use thiserror::Error;

use bridge_types::{TransactionHash, TransferRequest};

/// Re-export implementations
pub mod implementations {
	pub mod mock;
}

pub use implementations::mock::MockBridgeDelivery;

/// Errors that can occur during transfer delivery operations.
///
/// The core treats every variant as opaque: it records the message for
/// display and leaves recovery to the user.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
	/// Error that occurs during network communication.
	#[error("Network error: {0}")]
	Network(String),
	/// Error that occurs when the bridge transaction itself fails.
	#[error("Transfer failed: {0}")]
	TransferFailed(String),
	/// The connected wallet or signer refused the transfer.
	#[error("Transfer rejected: {0}")]
	Rejected(String),
}

/// Trait defining the interface for transfer delivery implementations.
///
/// Submission is asynchronous; a successful return means the transfer
/// transaction was accepted and yields its handle. Implementations are
/// configured with the verse bridge revision at construction time, not
/// per request.
#[async_trait]
#[cfg_attr(feature = "testing", mockall::automock)]
pub trait DeliveryInterface: Send + Sync {
	/// Submits a validated transfer and returns its transaction hash.
	async fn submit(&self, request: &TransferRequest) -> Result<TransactionHash, DeliveryError>;
}
