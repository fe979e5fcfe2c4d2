//! Transfer direction, request, and transaction handle types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::networks::{ChainId, TokenId};

/// Blockchain address representation.
///
/// Stores addresses as raw bytes; serialized as a 0x-prefixed hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(pub Vec<u8>);

impl Serialize for Address {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&format!("0x{}", hex::encode(&self.0)))
	}
}

impl<'de> Deserialize<'de> for Address {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		let bytes = hex::decode(s.trim_start_matches("0x"))
			.map_err(|e| serde::de::Error::custom(format!("Invalid hex address: {}", e)))?;

		if bytes.len() != 20 {
			return Err(serde::de::Error::custom(format!(
				"Invalid address length: expected 20 bytes, got {}",
				bytes.len()
			)));
		}

		Ok(Address(bytes))
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{}", hex::encode(&self.0))
	}
}

/// Blockchain transaction hash representation.
///
/// Stores hashes as raw bytes to stay agnostic of the verse's format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHash(pub Vec<u8>);

impl fmt::Display for TransactionHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{}", hex::encode(&self.0))
	}
}

/// Which way funds move between the hub layer and the verse.
///
/// The direction alone decides which chain is the funds source: deposits
/// move hub→verse, withdrawals verse→hub. It is only ever changed by an
/// explicit toggle, never inferred from other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	/// Hub layer → verse.
	Deposit,
	/// Verse → hub layer.
	Withdraw,
}

impl Direction {
	/// The opposite direction. `toggled` is its own inverse.
	pub fn toggled(self) -> Self {
		match self {
			Direction::Deposit => Direction::Withdraw,
			Direction::Withdraw => Direction::Deposit,
		}
	}

	/// Chain the funds leave from, given the hub/verse pair.
	pub fn source_chain(self, hub: ChainId, verse: ChainId) -> ChainId {
		match self {
			Direction::Deposit => hub,
			Direction::Withdraw => verse,
		}
	}

	/// Chain the funds arrive on, given the hub/verse pair.
	pub fn dest_chain(self, hub: ChainId, verse: ChainId) -> ChainId {
		match self {
			Direction::Deposit => verse,
			Direction::Withdraw => hub,
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Direction::Deposit => write!(f, "deposit"),
			Direction::Withdraw => write!(f, "withdraw"),
		}
	}
}

/// Fully resolved parameters for one transfer, as consumed by the
/// transfer executor.
///
/// Only ever constructed from validated state; the amount field carries
/// the user's decimal string verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
	pub direction: Direction,
	pub source_chain: ChainId,
	pub dest_chain: ChainId,
	pub token: TokenId,
	pub amount: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_direction_toggle_is_involution() {
		assert_eq!(Direction::Deposit.toggled(), Direction::Withdraw);
		assert_eq!(Direction::Withdraw.toggled(), Direction::Deposit);
		assert_eq!(Direction::Deposit.toggled().toggled(), Direction::Deposit);
	}

	#[test]
	fn test_direction_chain_sides() {
		let (hub, verse) = (248, 19011);
		assert_eq!(Direction::Deposit.source_chain(hub, verse), hub);
		assert_eq!(Direction::Deposit.dest_chain(hub, verse), verse);
		assert_eq!(Direction::Withdraw.source_chain(hub, verse), verse);
		assert_eq!(Direction::Withdraw.dest_chain(hub, verse), hub);
	}

	#[test]
	fn test_address_hex_round_trip() {
		let json = "\"0x5fbdb2315678afecb367f032d93f642f64180aa3\"";
		let addr: Address = serde_json::from_str(json).unwrap();
		assert_eq!(addr.0.len(), 20);
		assert_eq!(serde_json::to_string(&addr).unwrap(), json);
	}

	#[test]
	fn test_address_rejects_wrong_length() {
		let err = serde_json::from_str::<Address>("\"0x1234\"");
		assert!(err.is_err());
	}
}
