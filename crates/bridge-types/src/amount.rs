//! Decimal-string amount validation.
//!
//! Bridge amounts are carried as decimal strings end to end, because user
//! input can name values far beyond the range a 64-bit float represents
//! exactly. Shape checks and digit counting therefore operate on the string
//! itself; floating-point parsing is used only for the coarse "finite and
//! positive" check, where its precision loss cannot change the verdict.

use thiserror::Error;

/// Upper bound on integer-part digits plus fractional-part digits.
///
/// Fixed protocol constant: the bridge contracts carry amounts in a 256-bit
/// word, and 79 decimal digits is the width that can name any such value.
/// It is deliberately not derived from any token's declared precision.
pub const MAX_TOTAL_DIGITS: usize = 79;

/// Reasons a syntactically well-formed amount is still not transferable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
	/// The string contains a character other than a digit, or more than one dot.
	#[error("amount is not a plain decimal number")]
	Malformed,
	/// The string does not name a finite number greater than zero.
	#[error("amount must be greater than zero")]
	NotPositive,
	/// Integer and fractional digits together exceed [`MAX_TOTAL_DIGITS`].
	#[error("amount exceeds {MAX_TOTAL_DIGITS} digits")]
	TooManyDigits,
	/// More fractional digits than the token's smallest unit supports.
	#[error("amount has more than {allowed} fractional digits")]
	PrecisionExceeded { allowed: u8 },
}

/// Returns true if `input` is empty or matches `digits [ '.' digits ]`,
/// where either digit run may itself be empty.
///
/// This is the keystroke-level shape guard: it accepts intermediate states
/// such as `""`, `"."` or `"3."` that a user passes through while typing,
/// and rejects anything containing a second dot or a non-digit character.
pub fn is_well_formed(input: &str) -> bool {
	let mut seen_dot = false;
	for c in input.chars() {
		match c {
			'0'..='9' => {}
			'.' if !seen_dot => seen_dot = true,
			_ => return false,
		}
	}
	true
}

/// Validates an amount string against a token's decimal precision.
///
/// An amount is transferable iff it is well formed per [`is_well_formed`],
/// names a finite number greater than zero, spans at most
/// [`MAX_TOTAL_DIGITS`] digits in total, and carries no more fractional
/// digits than `decimals` allows.
pub fn validate_amount(input: &str, decimals: u8) -> Result<(), AmountError> {
	if !is_well_formed(input) {
		return Err(AmountError::Malformed);
	}

	// Coarse positivity check only; magnitude is judged on the string below.
	match input.parse::<f64>() {
		Ok(n) if n.is_finite() && n > 0.0 => {}
		_ => return Err(AmountError::NotPositive),
	}

	let (integer_part, fractional_part) = match input.split_once('.') {
		Some((i, f)) => (i, f),
		None => (input, ""),
	};

	if integer_part.len() + fractional_part.len() > MAX_TOTAL_DIGITS {
		return Err(AmountError::TooManyDigits);
	}

	if fractional_part.len() > decimals as usize {
		return Err(AmountError::PrecisionExceeded { allowed: decimals });
	}

	Ok(())
}
