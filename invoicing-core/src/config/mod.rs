//! Configuration for invoicing-core.

use crate::models::TaxMode;
use chrono::Duration;
use serde::Deserialize;
use service_core::config::load_config;
use service_core::error::AppError;
use service_core::observability::LogFormat;

/// Environment variables use the `INVOICING_` prefix, e.g.
/// `INVOICING_DEFAULT_TAX_MODE=igst`.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoicingConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Tax mode a new invoice starts in.
    #[serde(default)]
    pub default_tax_mode: TaxMode,
    #[serde(default = "default_lookup_cache_ttl_secs")]
    pub lookup_cache_ttl_secs: u64,
}

const MAX_LOOKUP_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

fn default_service_name() -> String {
    "invoicing-core".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_lookup_cache_ttl_secs() -> u64 {
    300
}

impl Default for InvoicingConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            default_tax_mode: TaxMode::default(),
            lookup_cache_ttl_secs: default_lookup_cache_ttl_secs(),
        }
    }
}

impl InvoicingConfig {
    pub fn from_env() -> Result<Self, AppError> {
        load_config("INVOICING")
    }

    /// Cache TTL, capped at one year.
    pub fn lookup_cache_ttl(&self) -> Duration {
        let secs = self.lookup_cache_ttl_secs.min(MAX_LOOKUP_CACHE_TTL_SECS);
        Duration::seconds(secs as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = InvoicingConfig::default();
        assert_eq!(config.service_name, "invoicing-core");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.default_tax_mode, TaxMode::SgstCgst);
        assert_eq!(config.lookup_cache_ttl(), Duration::seconds(300));
    }

    #[test]
    fn test_lookup_cache_ttl_is_capped() {
        let config = InvoicingConfig {
            lookup_cache_ttl_secs: u64::MAX,
            ..InvoicingConfig::default()
        };
        assert_eq!(config.lookup_cache_ttl(), Duration::days(365));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var("INVOICING_DEFAULT_TAX_MODE", "igst");
        std::env::set_var("INVOICING_LOG_FORMAT", "pretty");
        std::env::set_var("INVOICING_LOOKUP_CACHE_TTL_SECS", "30");

        let config = InvoicingConfig::from_env();

        std::env::remove_var("INVOICING_DEFAULT_TAX_MODE");
        std::env::remove_var("INVOICING_LOG_FORMAT");
        std::env::remove_var("INVOICING_LOOKUP_CACHE_TTL_SECS");

        let config = config.unwrap();
        assert_eq!(config.default_tax_mode, TaxMode::Igst);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.lookup_cache_ttl_secs, 30);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_tax_mode() {
        std::env::set_var("INVOICING_DEFAULT_TAX_MODE", "vat");
        let config = InvoicingConfig::from_env();
        std::env::remove_var("INVOICING_DEFAULT_TAX_MODE");

        assert!(matches!(config, Err(AppError::ConfigError(_))));
    }
}
