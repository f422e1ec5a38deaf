//! Domain service backing the [`CoinChangeQuery`] port.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::CoinChangeQuery;
use crate::domain::{CoinChangeRequest, Error, MinimumCoins, ValidationLimits, solve};

/// Validates requests against configured limits, then solves them.
///
/// Holds no mutable state; one instance serves every request concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinChangeService {
    limits: ValidationLimits,
}

impl CoinChangeService {
    /// Create a service enforcing `limits`.
    #[must_use]
    pub const fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Limits applied during validation.
    #[must_use]
    pub const fn limits(&self) -> ValidationLimits {
        self.limits
    }
}

#[async_trait]
impl CoinChangeQuery for CoinChangeService {
    async fn minimum_coins(&self, request: CoinChangeRequest) -> Result<MinimumCoins, Error> {
        let valid = request.validate(&self.limits).map_err(|err| {
            let (kind, field) = (err.kind(), err.field());
            let error = Error::from(err);
            info!(
                code = error.code().as_str(),
                kind,
                field,
                "coin change request rejected"
            );
            error
        })?;

        let result = solve(&valid.denominations, valid.amount);
        debug!(
            amount = valid.amount.get(),
            denominations = valid.denominations.len(),
            minimum_coins = result.to_wire(),
            "coin change solved"
        );
        Ok(result)
    }
}
