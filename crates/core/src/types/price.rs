//! Unit price type backed by decimal arithmetic.
//!
//! Menu controls supply prices as raw strings. Parsing them through
//! [`Price::parse`] at the boundary means a malformed price can never reach
//! the cart and corrupt totals.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input string is not a decimal number.
    #[error("price is not a number: {input:?}")]
    NotANumber {
        /// The rejected input.
        input: String,
    },
    /// The amount is negative.
    #[error("price cannot be negative: {amount}")]
    Negative {
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A non-negative unit price in the store currency (USD).
///
/// The amount is held at full precision; rounding to two decimals happens
/// only at the presentation boundary ([`Price::display`]), never in stored
/// state.
///
/// ## Examples
///
/// ```
/// use hik_cafe_core::Price;
///
/// let latte = Price::parse("4.50").unwrap();
/// assert_eq!(latte.display(), "$4.50");
///
/// // Dollar signs and surrounding whitespace are tolerated
/// assert!(Price::parse(" $3.00 ").is_ok());
///
/// // Garbage is not
/// assert!(Price::parse("four fifty").is_err());
/// assert!(Price::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative { amount });
        }
        Ok(Self(amount))
    }

    /// Parse a `Price` from a string as supplied by a menu control.
    ///
    /// Accepts an optional leading `$` and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not a decimal number, or
    /// is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim().trim_start_matches('$');
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount: Decimal = trimmed.parse().map_err(|_| PriceError::NotANumber {
            input: s.to_owned(),
        })?;

        Self::new(amount)
    }

    /// The exact amount, at full precision.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display, rounded to two decimals (e.g., "$4.50").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0.round_dp(2))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
