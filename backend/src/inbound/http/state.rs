//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable with mocks.

use std::sync::Arc;

use crate::domain::CoinChangeService;
use crate::domain::ports::CoinChangeQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Port answering minimum-coin queries.
    pub coin_change: Arc<dyn CoinChangeQuery>,
}

impl HttpState {
    /// Bundle the given port implementations.
    pub fn new(coin_change: Arc<dyn CoinChangeQuery>) -> Self {
        Self { coin_change }
    }
}

impl From<CoinChangeService> for HttpState {
    fn from(service: CoinChangeService) -> Self {
        Self::new(Arc::new(service))
    }
}
