//! Driving port for minimum-coin queries.
//!
//! Inbound adapters decode requests into [`CoinChangeRequest`] and call this
//! port; they never touch the validator or solver directly.

use async_trait::async_trait;

use crate::domain::{CoinChangeRequest, Error, MinimumCoins};

/// Answer "how few coins make this amount?".
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), coin_change::domain::Error> {
/// use coin_change::domain::ports::CoinChangeQuery;
/// use coin_change::domain::{
///     AmountInput, CoinChangeRequest, CoinChangeService, DenominationsInput, MinimumCoins,
/// };
///
/// let service = CoinChangeService::default();
/// let result = service
///     .minimum_coins(CoinChangeRequest {
///         denominations: DenominationsInput::Text("1,2,5".to_owned()),
///         amount: AmountInput::Text("11".to_owned()),
///     })
///     .await?;
/// assert_eq!(result, MinimumCoins::Count(3));
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoinChangeQuery: Send + Sync {
    /// Validate `request` and solve it.
    ///
    /// Validation failures surface as [`crate::domain::ErrorCode::InvalidRequest`]
    /// errors whose message is the stable text for the failing field.
    async fn minimum_coins(&self, request: CoinChangeRequest) -> Result<MinimumCoins, Error>;
}
