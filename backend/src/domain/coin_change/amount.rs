//! Target amount and its validator.

use serde_json::Value;

use super::limits::ValidationLimits;
use super::validation::{
    AmountFault, CoinChangeValidationError, IntegerToken, describe_value, parse_text_token,
    parse_value_token,
};

/// Raw amount as decoded by an inbound adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    /// A JSON value, normally a number.
    Structured(Value),
    /// Numeric text, e.g. a form field.
    Text(String),
    /// The field was absent.
    Missing,
}

/// Non-negative target amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(usize);

impl Amount {
    /// Wrap a trusted amount.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Validate raw input into an amount within `limits`.
    ///
    /// # Errors
    /// Returns [`CoinChangeValidationError::InvalidAmount`] when the input is
    /// missing, not an integer, negative, or above the configured ceiling.
    ///
    /// # Examples
    /// ```
    /// use coin_change::domain::{Amount, AmountInput, ValidationLimits};
    ///
    /// let amount = Amount::parse(AmountInput::Text("11".into()), &ValidationLimits::default());
    /// assert_eq!(amount.map(Amount::get), Ok(11));
    /// ```
    pub fn parse(
        input: AmountInput,
        limits: &ValidationLimits,
    ) -> Result<Self, CoinChangeValidationError> {
        let (parsed, token) = match input {
            AmountInput::Structured(value) => (parse_value_token(&value), describe_value(&value)),
            AmountInput::Text(text) => (parse_text_token(&text), text.trim().to_owned()),
            AmountInput::Missing => return Err(reject(AmountFault::Missing)),
        };

        let value = match parsed {
            IntegerToken::Integer(value) => value,
            IntegerToken::Malformed => return Err(reject(AmountFault::Malformed { token })),
        };
        let Ok(unsigned) = u64::try_from(value) else {
            return Err(reject(AmountFault::Negative { value }));
        };
        let max = limits.max_amount();
        match usize::try_from(unsigned) {
            Ok(amount) if amount <= max => Ok(Self(amount)),
            _ => Err(reject(AmountFault::TooLarge { value, max })),
        }
    }

    /// The amount as a table index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

fn reject(fault: AmountFault) -> CoinChangeValidationError {
    CoinChangeValidationError::InvalidAmount(fault)
}
