//! Application settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `COIN_CHANGE_*` environment variables over an
//! optional configuration file.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{DEFAULT_MAX_AMOUNT, DEFAULT_MAX_DENOMINATIONS, ValidationLimits};

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid listen host {host:?}: {source}")]
    InvalidHost {
        /// Offending value.
        host: String,
        /// Underlying parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Listen and validation settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COIN_CHANGE")]
pub struct AppSettings {
    /// Listen port.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// Listen address; defaults to all interfaces.
    pub host: Option<String>,
    /// Largest amount a request may ask for.
    pub max_amount: Option<usize>,
    /// Most distinct denominations a request may carry.
    pub max_denominations: Option<usize>,
}

impl AppSettings {
    /// Socket address to bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Validation limits derived from the settings.
    #[must_use]
    pub fn limits(&self) -> ValidationLimits {
        ValidationLimits::new(self.max_amount.unwrap_or(DEFAULT_MAX_AMOUNT))
            .with_max_denominations(self.max_denominations.unwrap_or(DEFAULT_MAX_DENOMINATIONS))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("coin-change")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("COIN_CHANGE_PORT", None::<String>),
            ("COIN_CHANGE_HOST", None::<String>),
            ("COIN_CHANGE_MAX_AMOUNT", None::<String>),
            ("COIN_CHANGE_MAX_DENOMINATIONS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(
            settings.bind_addr().expect("default host parses"),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
        assert_eq!(settings.limits().max_amount(), DEFAULT_MAX_AMOUNT);
        assert_eq!(
            settings.limits().max_denominations(),
            DEFAULT_MAX_DENOMINATIONS
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("COIN_CHANGE_PORT", Some("8080".to_owned())),
            ("COIN_CHANGE_HOST", Some("127.0.0.1".to_owned())),
            ("COIN_CHANGE_MAX_AMOUNT", Some("500".to_owned())),
            ("COIN_CHANGE_MAX_DENOMINATIONS", Some("12".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("host parses"),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
        assert_eq!(settings.limits().max_amount(), 500);
        assert_eq!(settings.limits().max_denominations(), 12);
    }

    #[rstest]
    fn invalid_host_is_reported() {
        let settings = AppSettings {
            port: DEFAULT_PORT,
            host: Some("localhost:3000".to_owned()),
            max_amount: None,
            max_denominations: None,
        };
        let err = settings.bind_addr().expect_err("host is not an IP");
        assert!(matches!(err, SettingsError::InvalidHost { .. }));
    }
}
