//! Coin change: input validation and the minimum-coin solver.
//!
//! Adapters decode a request into [`CoinChangeRequest`], choosing the
//! structured or textual variant of each field from how the request arrived.
//! [`CoinChangeRequest::validate`] is the single typed entry point that turns
//! raw input into a [`ValidatedRequest`], which [`solve`] consumes.

mod amount;
mod denominations;
mod limits;
mod solver;
mod validation;

pub use self::amount::{Amount, AmountInput};
pub use self::denominations::{DENOMINATION_SEPARATOR, Denominations, DenominationsInput};
pub use self::limits::{DEFAULT_MAX_AMOUNT, DEFAULT_MAX_DENOMINATIONS, ValidationLimits};
pub use self::solver::{MinimumCoins, solve};
pub use self::validation::{AmountFault, CoinChangeValidationError, DenominationFault};

/// Raw coin change request as decoded by an inbound adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinChangeRequest {
    /// Denominations to choose from.
    pub denominations: DenominationsInput,
    /// Target amount.
    pub amount: AmountInput,
}

/// Request whose inputs passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Validated denomination set.
    pub denominations: Denominations,
    /// Validated target amount.
    pub amount: Amount,
}

impl CoinChangeRequest {
    /// Validate both fields against `limits`, denominations first.
    ///
    /// # Errors
    /// Returns the first failing field's [`CoinChangeValidationError`],
    /// including [`DenominationFault::TooMany`] when more distinct
    /// denominations arrive than `limits` allows.
    ///
    /// # Examples
    /// ```
    /// use coin_change::domain::{
    ///     AmountInput, CoinChangeRequest, DenominationsInput, MinimumCoins, ValidationLimits,
    ///     solve,
    /// };
    ///
    /// let request = CoinChangeRequest {
    ///     denominations: DenominationsInput::Text("1, 2, 5".into()),
    ///     amount: AmountInput::Text("11".into()),
    /// };
    /// let valid = request.validate(&ValidationLimits::default()).unwrap();
    /// assert_eq!(solve(&valid.denominations, valid.amount), MinimumCoins::Count(3));
    /// ```
    pub fn validate(
        self,
        limits: &ValidationLimits,
    ) -> Result<ValidatedRequest, CoinChangeValidationError> {
        let denominations = Denominations::parse(self.denominations)?;
        let max = limits.max_denominations();
        if denominations.len() > max {
            return Err(CoinChangeValidationError::InvalidDenomination(
                DenominationFault::TooMany {
                    count: denominations.len(),
                    max,
                },
            ));
        }
        let amount = Amount::parse(self.amount, limits)?;
        Ok(ValidatedRequest {
            denominations,
            amount,
        })
    }
}

#[cfg(test)]
mod tests;
