//! Core state machine for the verse bridge.
//!
//! This crate owns the one piece of bridge logic with real invariants:
//! the direction/asset/amount state the user edits, the decimal-precision
//! validation derived from it, and the readiness signal that gates the
//! actual transfer. Everything that touches a chain or a wallet sits
//! behind the collaborator traits from `bridge-catalog`, `bridge-balance`
//! and `bridge-delivery`.

/// The bridge direction/amount validator.
pub mod validator;

pub use validator::{BalancePair, BridgeContext, BridgeError, BridgeValidator};
