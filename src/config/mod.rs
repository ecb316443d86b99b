//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `GYM_REVENUE` prefix and nested
//! values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use gym_revenue::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! println!("listening on port {}", config.server.port);
//! ```

mod database;
mod error;
mod reporting;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use reporting::ReportingConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Host, port, environment and HTTP limits
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection pool
    pub database: DatabaseConfig,

    /// Default reporting window and raw revenue policy
    #[serde(default)]
    pub reporting: ReportingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `.env` if present, then every `GYM_REVENUE__*` variable:
    ///
    /// - `GYM_REVENUE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `GYM_REVENUE__DATABASE__URL=...` -> `database.url = ...`
    /// - `GYM_REVENUE__REPORTING__MONTHS_BEFORE=6` -> `reporting.months_before = 6`
    ///
    /// The loaded values are validated before they are returned.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GYM_REVENUE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<AppConfig>()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.reporting.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::revenue::RawRevenuePolicy;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "GYM_REVENUE__DATABASE__URL",
        "GYM_REVENUE__SERVER__PORT",
        "GYM_REVENUE__SERVER__ENVIRONMENT",
        "GYM_REVENUE__REPORTING__MONTHS_BEFORE",
        "GYM_REVENUE__REPORTING__MONTHS_AFTER",
        "GYM_REVENUE__REPORTING__RAW_REVENUE_POLICY",
    ];

    fn set_minimal_env() {
        env::set_var("GYM_REVENUE__DATABASE__URL", "postgresql://test@localhost/gym");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn loads_from_environment_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(config.database.url, "postgresql://test@localhost/gym");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.reporting, ReportingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reporting_section_is_overridable() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GYM_REVENUE__REPORTING__MONTHS_BEFORE", "6");
        env::set_var("GYM_REVENUE__REPORTING__RAW_REVENUE_POLICY", "by_start_date");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.reporting.months_before, 6);
        assert_eq!(config.reporting.months_after, 6);
        assert_eq!(config.reporting.raw_revenue_policy, RawRevenuePolicy::ByStartDate);
    }

    #[test]
    fn production_flag_follows_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GYM_REVENUE__SERVER__ENVIRONMENT", "production");
        env::set_var("GYM_REVENUE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn oversized_reporting_window_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GYM_REVENUE__REPORTING__MONTHS_AFTER", "500");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::WindowTooWide {
                field: "months_after",
                ..
            }))
        ));
    }

    #[test]
    fn missing_database_url_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }
}
