//! Denomination set and its validator.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use serde_json::Value;

use super::validation::{
    CoinChangeValidationError, DenominationFault, IntegerToken, describe_value,
    parse_text_token, parse_value_token,
};

/// Separator between denominations in textual input.
pub const DENOMINATION_SEPARATOR: char = ',';

/// Raw denominations as decoded by an inbound adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum DenominationsInput {
    /// A sequence of JSON values, e.g. `[1, 2, 5]`.
    Structured(Vec<Value>),
    /// Comma-separated text, e.g. `"1, 2, 5"`.
    Text(String),
    /// A value that is neither a sequence nor text.
    Unsupported(Value),
    /// The field was absent.
    Missing,
}

/// Non-empty set of distinct, strictly positive denominations.
///
/// Repeated values collapse to their first occurrence; input order is kept
/// otherwise.
///
/// # Examples
/// ```
/// use coin_change::domain::{Denominations, DenominationsInput};
///
/// let set = Denominations::parse(DenominationsInput::Text("1, 2, 5".into())).unwrap();
/// assert_eq!(set.values().collect::<Vec<_>>(), vec![1, 2, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations(Vec<NonZeroUsize>);

impl Denominations {
    /// Validate raw input into a denomination set.
    ///
    /// # Errors
    /// Returns [`CoinChangeValidationError::InvalidDenomination`] when the
    /// input is missing, not a sequence, empty, holds a token that is not an
    /// integer, or holds a value below one. Fault indices refer to the raw
    /// input, before repeats collapse.
    pub fn parse(input: DenominationsInput) -> Result<Self, CoinChangeValidationError> {
        let tokens: Vec<(IntegerToken, String)> = match input {
            DenominationsInput::Structured(values) => values
                .iter()
                .map(|value| (parse_value_token(value), describe_value(value)))
                .collect(),
            DenominationsInput::Text(text) => text
                .split(DENOMINATION_SEPARATOR)
                .map(|segment| (parse_text_token(segment), segment.trim().to_owned()))
                .collect(),
            DenominationsInput::Unsupported(_) => {
                return Err(reject(DenominationFault::NotASequence));
            }
            DenominationsInput::Missing => return Err(reject(DenominationFault::Missing)),
        };

        if tokens.is_empty() {
            return Err(reject(DenominationFault::Empty));
        }

        tokens
            .into_iter()
            .enumerate()
            .map(|(index, (parsed, token))| match parsed {
                IntegerToken::Integer(value) => positive(value)
                    .ok_or_else(|| reject(DenominationFault::NotPositive { index, value })),
                IntegerToken::Malformed => {
                    Err(reject(DenominationFault::Malformed { index, token }))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|values| Self(distinct(values)))
    }

    /// Build a set from already-trusted values.
    ///
    /// Returns `None` when `values` is empty or contains a zero.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = usize>) -> Option<Self> {
        let set = values
            .into_iter()
            .map(NonZeroUsize::new)
            .collect::<Option<Vec<_>>>()?;
        (!set.is_empty()).then(|| Self(distinct(set)))
    }

    /// Distinct denominations in the order they were first supplied.
    pub fn values(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|value| value.get())
    }

    /// Number of distinct denominations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a validated set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn distinct(values: Vec<NonZeroUsize>) -> Vec<NonZeroUsize> {
    let mut seen = HashSet::with_capacity(values.len());
    values.into_iter().filter(|value| seen.insert(*value)).collect()
}

fn reject(fault: DenominationFault) -> CoinChangeValidationError {
    CoinChangeValidationError::InvalidDenomination(fault)
}

// Values beyond `usize::MAX` saturate; they exceed every amount anyway.
fn positive(value: i64) -> Option<NonZeroUsize> {
    let value = u64::try_from(value).ok()?;
    NonZeroUsize::new(usize::try_from(value).unwrap_or(usize::MAX))
}
