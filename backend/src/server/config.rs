//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use coin_change::config::AppSettings;
use coin_change::config::SettingsError;
use coin_change::domain::ValidationLimits;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) limits: ValidationLimits,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration from explicit values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, limits: ValidationLimits) -> Self {
        Self {
            bind_addr,
            limits,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Derive the server configuration from loaded application settings.
    ///
    /// # Errors
    /// Propagates [`SettingsError`] when the listen address is invalid.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(settings.bind_addr()?, settings.limits()))
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
