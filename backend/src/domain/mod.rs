//! Domain primitives and services.
//!
//! Purpose: hold the coin change rules (validation and the minimum-coin
//! solver) free of any transport concern. Inbound adapters reach them through
//! [`ports::CoinChangeQuery`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error envelope.
//! - TraceId: request correlation identifier.
//! - Denominations, Amount, CoinChangeRequest: validated and raw inputs.
//! - solve / MinimumCoins: the solver and its result.
//! - CoinChangeService: port implementation.

pub mod coin_change;
mod coin_change_service;
pub mod error;
pub mod ports;
mod trace_id;

pub use self::coin_change::{
    Amount, AmountFault, AmountInput, CoinChangeRequest, CoinChangeValidationError,
    DEFAULT_MAX_AMOUNT, DEFAULT_MAX_DENOMINATIONS, DENOMINATION_SEPARATOR, DenominationFault,
    Denominations, DenominationsInput, MinimumCoins, ValidatedRequest, ValidationLimits, solve,
};
pub use self::coin_change_service::CoinChangeService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
