//! Bridge direction and amount validation state machine.
//!
//! [`BridgeValidator`] holds the transfer direction, the selected asset
//! and the raw amount text, and derives validity from them on every read;
//! nothing derived is ever cached. All mutations happen through `&mut
//! self` commands driven by discrete user events, so the type needs no
//! internal locking.

use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use bridge_balance::BalanceInterface;
use bridge_catalog::CatalogInterface;
use bridge_config::Config;
use bridge_delivery::{DeliveryError, DeliveryInterface};
use bridge_types::{
	amount, AmountError, ChainId, Direction, TokenId, TransactionHash, TransferRequest,
};

/// Errors that can occur during bridge core operations.
#[derive(Debug, Error)]
pub enum BridgeError {
	/// A gated operation was called while its gate was closed. This is a
	/// caller contract violation, not a recoverable runtime condition.
	#[error("Invalid state: {0}")]
	InvalidState(String),
	/// The requested token is not selectable for the current direction.
	#[error("Token not available: {0}")]
	TokenUnavailable(TokenId),
	/// Error relayed opaquely from the transfer executor.
	#[error("Delivery error: {0}")]
	Delivery(#[from] DeliveryError),
}

/// Immutable session context for the validator.
///
/// Constructed once from validated configuration and handed to the
/// validator's constructor; the core never reads ambient global state.
#[derive(Debug, Clone)]
pub struct BridgeContext {
	/// Chain id of the hub layer.
	pub hub_chain_id: ChainId,
	/// Chain id of the verse.
	pub verse_chain_id: ChainId,
	/// Tokens that cannot be selected while depositing.
	pub deposit_exclusions: HashSet<TokenId>,
}

impl BridgeContext {
	/// Builds the context from validated configuration.
	pub fn from_config(config: &Config) -> Self {
		Self {
			hub_chain_id: config.bridge.hub_chain_id,
			verse_chain_id: config.bridge.verse_chain_id,
			deposit_exclusions: config.deposit_exclusions(),
		}
	}
}

/// Hub- and verse-side balances of one token, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancePair {
	pub hub: String,
	pub verse: String,
}

/// Decimal precision assumed for a token the catalog cannot describe.
const DEFAULT_DECIMALS: u8 = 18;

/// The bridge direction/amount state machine.
///
/// State: direction (deposit or withdraw), selected token, raw amount
/// text, and the in-flight bookkeeping around executor calls. Validity
/// and readiness are derived, never stored.
pub struct BridgeValidator {
	context: BridgeContext,
	catalog: Arc<dyn CatalogInterface>,
	balances: Arc<dyn BalanceInterface>,
	delivery: Arc<dyn DeliveryInterface>,

	direction: Direction,
	token: TokenId,
	amount: String,

	in_flight: bool,
	last_hash: Option<TransactionHash>,
	last_error: Option<String>,
}

impl BridgeValidator {
	/// Creates a validator in its initial state: depositing the native
	/// asset, empty amount, nothing in flight.
	pub fn new(
		context: BridgeContext,
		catalog: Arc<dyn CatalogInterface>,
		balances: Arc<dyn BalanceInterface>,
		delivery: Arc<dyn DeliveryInterface>,
	) -> Self {
		Self {
			context,
			catalog,
			balances,
			delivery,
			direction: Direction::Deposit,
			token: TokenId::NATIVE,
			amount: String::new(),
			in_flight: false,
			last_hash: None,
			last_error: None,
		}
	}

	/// Current transfer direction.
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Currently selected token.
	pub fn token(&self) -> TokenId {
		self.token
	}

	/// Raw amount text as last committed.
	pub fn amount(&self) -> &str {
		&self.amount
	}

	/// True while a transfer submission is awaiting its outcome.
	pub fn in_flight(&self) -> bool {
		self.in_flight
	}

	/// Handle of the most recent successful transfer, if any.
	pub fn last_hash(&self) -> Option<&TransactionHash> {
		self.last_hash.as_ref()
	}

	/// Opaque reason of the most recent failed transfer, if any.
	pub fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	/// Chain the funds would leave from under the current direction.
	pub fn source_chain(&self) -> ChainId {
		self.direction
			.source_chain(self.context.hub_chain_id, self.context.verse_chain_id)
	}

	/// Chain the funds would arrive on under the current direction.
	pub fn dest_chain(&self) -> ChainId {
		self.direction
			.dest_chain(self.context.hub_chain_id, self.context.verse_chain_id)
	}

	/// Tokens selectable under the given direction, in catalog order.
	///
	/// The enumeration is always keyed hub→verse; only the exclusion set
	/// depends on the direction.
	fn tokens_for(&self, direction: Direction) -> Vec<TokenId> {
		let excluding = match direction {
			Direction::Deposit => self.context.deposit_exclusions.clone(),
			Direction::Withdraw => HashSet::new(),
		};
		self.catalog.list_tokens(
			self.context.hub_chain_id,
			self.context.verse_chain_id,
			&excluding,
		)
	}

	/// Tokens selectable under the current direction, in catalog order.
	pub fn available_tokens(&self) -> Vec<TokenId> {
		self.tokens_for(self.direction)
	}

	/// Flips the transfer direction.
	///
	/// The token selection is retained when still available; otherwise it
	/// silently falls back to the catalog's first entry for the new
	/// direction. The amount text is left untouched, and validity is
	/// simply re-derived against the (unchanged) token on the next read.
	pub fn toggle_direction(&mut self) {
		self.direction = self.direction.toggled();
		let available = self.available_tokens();
		if !available.contains(&self.token) {
			if let Some(first) = available.first() {
				debug!(
					from = %self.token,
					to = %first,
					direction = %self.direction,
					"selection not available after toggle, falling back"
				);
				self.token = *first;
			}
		}
	}

	/// Selects a token for the transfer.
	///
	/// Only tokens enumerated for the current direction are accepted;
	/// anything else is a [`BridgeError::TokenUnavailable`].
	pub fn select_token(&mut self, token: TokenId) -> Result<(), BridgeError> {
		if !self.available_tokens().contains(&token) {
			return Err(BridgeError::TokenUnavailable(token));
		}
		self.token = token;
		Ok(())
	}

	/// Attempts to replace the amount text with `raw`.
	///
	/// This is a pure shape guard: it commits and returns `true` for any
	/// string of digits with at most one dot (including empty), and
	/// returns `false` without touching state for anything else. Whether
	/// the committed text names a transferable amount is a separate,
	/// derived question answered by [`is_valid`](Self::is_valid).
	pub fn set_amount(&mut self, raw: &str) -> bool {
		if !amount::is_well_formed(raw) {
			return false;
		}
		self.amount = raw.to_string();
		true
	}

	/// Sets the amount to the source-side balance of the selected token.
	///
	/// The balance source is trusted, so its string is stored verbatim,
	/// bypassing the shape guard.
	pub async fn set_max(&mut self) {
		self.amount = self.balances.balance(self.source_chain(), self.token).await;
	}

	/// Decimal precision of the selected token.
	fn token_decimals(&self) -> u8 {
		self.catalog
			.token_info(self.token)
			.map(|info| info.decimals)
			.unwrap_or(DEFAULT_DECIMALS)
	}

	/// Why the current amount is not transferable, if it is not.
	pub fn validation_error(&self) -> Option<AmountError> {
		amount::validate_amount(&self.amount, self.token_decimals()).err()
	}

	/// True if the current amount is transferable for the selected token.
	pub fn is_valid(&self) -> bool {
		self.validation_error().is_none()
	}

	/// True if a transfer could be submitted right now.
	pub fn is_ready(&self) -> bool {
		self.is_valid() && !self.in_flight
	}

	/// Hub- and verse-side balances of the selected token.
	pub async fn display_balances(&self) -> BalancePair {
		BalancePair {
			hub: self
				.balances
				.balance(self.context.hub_chain_id, self.token)
				.await,
			verse: self
				.balances
				.balance(self.context.verse_chain_id, self.token)
				.await,
		}
	}

	/// Resolves the parameters a transfer executor consumes.
	///
	/// Callers must gate on [`is_valid`](Self::is_valid) first, mirroring
	/// the disabled-button contract at the UI boundary; calling this
	/// while invalid is a programming error.
	pub fn resolve_transfer_params(&self) -> Result<TransferRequest, BridgeError> {
		if !self.is_valid() {
			return Err(BridgeError::InvalidState(
				"resolve_transfer_params called while amount is invalid".into(),
			));
		}
		Ok(TransferRequest {
			direction: self.direction,
			source_chain: self.source_chain(),
			dest_chain: self.dest_chain(),
			token: self.token,
			amount: self.amount.clone(),
		})
	}

	/// Submits the current transfer through the delivery implementation.
	///
	/// Gated on readiness. The in-flight flag is raised before the
	/// executor call and cleared when the outcome arrives, success or
	/// failure; the outcome is recorded in `last_hash`/`last_error` and
	/// relayed to the caller unchanged.
	pub async fn bridge(&mut self) -> Result<TransactionHash, BridgeError> {
		if !self.is_ready() {
			return Err(BridgeError::InvalidState(
				"bridge called while not ready".into(),
			));
		}
		let request = self.resolve_transfer_params()?;

		self.in_flight = true;
		self.last_hash = None;
		self.last_error = None;
		let result = self.delivery.submit(&request).await;
		self.in_flight = false;

		match result {
			Ok(hash) => {
				info!(hash = %hash, direction = %request.direction, "bridge transfer submitted");
				self.last_hash = Some(hash.clone());
				Ok(hash)
			}
			Err(err) => {
				self.last_error = Some(err.to_string());
				Err(BridgeError::Delivery(err))
			}
		}
	}
}
