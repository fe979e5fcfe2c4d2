//! Common types for the verse bridge core.
//!
//! This crate defines the domain types shared by every bridge component:
//! chain and token identifiers, token metadata, transfer direction and
//! request types, and the decimal-string amount validation rules.

/// Decimal-string amount validation.
pub mod amount;
/// Network and token configuration types.
pub mod networks;
/// Transfer direction, request, and transaction handle types.
pub mod transfer;

pub use amount::{is_well_formed, validate_amount, AmountError, MAX_TOTAL_DIGITS};
pub use networks::{
	deserialize_networks, ChainId, NetworkConfig, NetworksConfig, TokenConfig, TokenId,
	HUB_CHAIN_ID,
};
pub use transfer::{Address, Direction, TransactionHash, TransferRequest};
