//! Validation failures for coin change requests and the integer token parser
//! shared by the denomination and amount validators.

use std::num::IntErrorKind;

use serde_json::{Value, json};

use crate::domain::Error;

/// Why a denomination set was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenominationFault {
    /// No denominations were supplied at all.
    Missing,
    /// The raw value was neither a sequence nor delimited text.
    NotASequence,
    /// The sequence held no denominations.
    Empty,
    /// A token was not a well-formed integer.
    Malformed { index: usize, token: String },
    /// A denomination was zero or negative.
    NotPositive { index: usize, value: i64 },
    /// More distinct denominations than the configured cap.
    TooMany { count: usize, max: usize },
}

/// Why an amount was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountFault {
    /// No amount was supplied.
    Missing,
    /// The raw value was not a well-formed integer.
    Malformed { token: String },
    /// The amount was below zero.
    Negative { value: i64 },
    /// The amount exceeded the configured ceiling.
    TooLarge { value: i64, max: usize },
}

/// Input validation failure.
///
/// The `Display` text is the stable, user-facing message for the failure
/// kind; the wrapped fault carries the structured reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoinChangeValidationError {
    /// The denomination set is unusable.
    #[error("Invalid coins! Enter numbers separated by commas.")]
    InvalidDenomination(DenominationFault),
    /// The target amount is unusable.
    #[error("Invalid amount! Enter a non-negative number.")]
    InvalidAmount(AmountFault),
}

impl CoinChangeValidationError {
    /// Stable machine-readable kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDenomination(_) => "invalid_denomination",
            Self::InvalidAmount(_) => "invalid_amount",
        }
    }

    /// Request field the failure refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidDenomination(_) => "coins",
            Self::InvalidAmount(_) => "amount",
        }
    }

    fn details(&self) -> Value {
        let mut details = json!({
            "field": self.field(),
            "code": self.kind(),
        });
        let reason = match self {
            Self::InvalidDenomination(fault) => match fault {
                DenominationFault::Missing => json!({ "reason": "missing" }),
                DenominationFault::NotASequence => json!({ "reason": "not_a_sequence" }),
                DenominationFault::Empty => json!({ "reason": "empty" }),
                DenominationFault::Malformed { index, token } => {
                    json!({ "reason": "malformed", "index": index, "value": token })
                }
                DenominationFault::NotPositive { index, value } => {
                    json!({ "reason": "not_positive", "index": index, "value": value })
                }
                DenominationFault::TooMany { count, max } => {
                    json!({ "reason": "too_many", "count": count, "max": max })
                }
            },
            Self::InvalidAmount(fault) => match fault {
                AmountFault::Missing => json!({ "reason": "missing" }),
                AmountFault::Malformed { token } => {
                    json!({ "reason": "malformed", "value": token })
                }
                AmountFault::Negative { value } => {
                    json!({ "reason": "negative", "value": value })
                }
                AmountFault::TooLarge { value, max } => {
                    json!({ "reason": "too_large", "value": value, "max": max })
                }
            },
        };
        if let (Some(target), Value::Object(extra)) = (details.as_object_mut(), reason) {
            target.extend(extra);
        }
        details
    }
}

impl From<CoinChangeValidationError> for Error {
    fn from(err: CoinChangeValidationError) -> Self {
        Error::invalid_request(err.to_string()).with_details(err.details())
    }
}

/// Outcome of reading one raw token as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntegerToken {
    /// A well-formed integer; values beyond `i64` saturate.
    Integer(i64),
    /// Anything else.
    Malformed,
}

/// Parse a textual integer token, ignoring surrounding whitespace.
pub(crate) fn parse_text_token(raw: &str) -> IntegerToken {
    match raw.trim().parse::<i64>() {
        Ok(value) => IntegerToken::Integer(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => IntegerToken::Integer(i64::MAX),
            IntErrorKind::NegOverflow => IntegerToken::Integer(i64::MIN),
            _ => IntegerToken::Malformed,
        },
    }
}

/// Read a JSON value as an integer token.
///
/// Integer numbers, whole numbers written with a fractional part (`5.0`) and
/// strings holding integers are accepted; fractional numbers and every other
/// JSON type are malformed.
pub(crate) fn parse_value_token(raw: &Value) -> IntegerToken {
    match raw {
        Value::Number(number) => match (number.as_i64(), number.as_u64()) {
            (Some(value), _) => IntegerToken::Integer(value),
            (None, Some(_)) => IntegerToken::Integer(i64::MAX),
            (None, None) => parse_whole_float(&number.to_string()),
        },
        Value::String(text) => parse_text_token(text),
        _ => IntegerToken::Malformed,
    }
}

// Floats render as `5.0`; exponent forms such as `1e20` stay malformed.
fn parse_whole_float(rendered: &str) -> IntegerToken {
    rendered
        .strip_suffix(".0")
        .map_or(IntegerToken::Malformed, parse_text_token)
}

/// Render a raw JSON token for error details without quoting strings.
pub(crate) fn describe_value(raw: &Value) -> String {
    match raw {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("11", IntegerToken::Integer(11))]
    #[case("  -5 ", IntegerToken::Integer(-5))]
    #[case("+7", IntegerToken::Integer(7))]
    #[case("99999999999999999999", IntegerToken::Integer(i64::MAX))]
    #[case("", IntegerToken::Malformed)]
    #[case("x", IntegerToken::Malformed)]
    #[case("2.5", IntegerToken::Malformed)]
    #[case("11abc", IntegerToken::Malformed)]
    fn text_tokens(#[case] raw: &str, #[case] expected: IntegerToken) {
        assert_eq!(parse_text_token(raw), expected);
    }

    #[rstest]
    #[case(json!(5), IntegerToken::Integer(5))]
    #[case(json!(" 5 "), IntegerToken::Integer(5))]
    #[case(json!(u64::MAX), IntegerToken::Integer(i64::MAX))]
    #[case(json!(5.0), IntegerToken::Integer(5))]
    #[case(json!(-3.0), IntegerToken::Integer(-3))]
    #[case(json!(2.5), IntegerToken::Malformed)]
    #[case(json!(1e300), IntegerToken::Malformed)]
    #[case(json!(null), IntegerToken::Malformed)]
    #[case(json!([1]), IntegerToken::Malformed)]
    fn value_tokens(#[case] raw: Value, #[case] expected: IntegerToken) {
        assert_eq!(parse_value_token(&raw), expected);
    }

    #[test]
    fn domain_error_carries_stable_message_and_reason() {
        let err: Error = CoinChangeValidationError::InvalidDenomination(
            DenominationFault::Malformed {
                index: 1,
                token: "x".to_owned(),
            },
        )
        .into();

        assert_eq!(
            err.message(),
            "Invalid coins! Enter numbers separated by commas."
        );
        assert_eq!(
            err.details(),
            Some(&json!({
                "field": "coins",
                "code": "invalid_denomination",
                "reason": "malformed",
                "index": 1,
                "value": "x",
            }))
        );
    }

    #[test]
    fn amount_error_reports_limit() {
        let err: Error =
            CoinChangeValidationError::InvalidAmount(AmountFault::TooLarge { value: 10, max: 5 })
                .into();

        assert_eq!(err.message(), "Invalid amount! Enter a non-negative number.");
        let details = err.details().expect("details present");
        assert_eq!(details["reason"], "too_large");
        assert_eq!(details["max"], 5);
    }
}
