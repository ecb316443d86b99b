//! Revenue reporting defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::revenue::{RawRevenuePolicy, MAX_WINDOW_MONTHS};

/// Defaults applied when a report request leaves a parameter out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReportingConfig {
    /// Months shown before the reference month
    #[serde(default = "default_months_before")]
    pub months_before: i32,

    /// Months shown after the reference month
    #[serde(default = "default_months_after")]
    pub months_after: i32,

    /// Which periods count toward raw revenue
    #[serde(default)]
    pub raw_revenue_policy: RawRevenuePolicy,
}

impl ReportingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("months_before", self.months_before),
            ("months_after", self.months_after),
        ] {
            if value < 0 {
                return Err(ValidationError::NegativeWindow { field, value });
            }
            if value > MAX_WINDOW_MONTHS {
                return Err(ValidationError::WindowTooWide {
                    field,
                    max: MAX_WINDOW_MONTHS,
                });
            }
        }
        Ok(())
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            months_before: default_months_before(),
            months_after: default_months_after(),
            raw_revenue_policy: RawRevenuePolicy::default(),
        }
    }
}

fn default_months_before() -> i32 {
    5
}

fn default_months_after() -> i32 {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_a_year() {
        let config = ReportingConfig::default();
        assert_eq!(config.months_before, 5);
        assert_eq!(config.months_after, 6);
        assert_eq!(config.raw_revenue_policy, RawRevenuePolicy::CompletedPayment);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_bounds_are_rejected() {
        let config = ReportingConfig {
            months_after: -2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::NegativeWindow {
                field: "months_after",
                value: -2
            })
        ));
    }

    #[test]
    fn oversized_window_is_rejected() {
        let config = ReportingConfig {
            months_before: 121,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::WindowTooWide { .. })
        ));
    }
}
