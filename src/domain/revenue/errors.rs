//! Revenue calculation errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidPeriod | 422 |
//! | InvalidWindow | 400 |
//! | WindowTooWide | 400 |
//! | WindowOutOfRange | 400 |

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::foundation::MembershipId;
use crate::domain::membership::PeriodViolation;

/// One malformed roster entry.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPeriod {
    pub id: MembershipId,
    pub violation: PeriodViolation,
}

/// Errors raised by the revenue engine.
///
/// These are precondition failures on the caller's input. The engine does
/// no I/O, so there are no transient variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevenueError {
    /// One or more roster entries are malformed. Every offender is listed.
    #[error("invalid membership periods: {}", describe(.violations))]
    InvalidPeriod { violations: Vec<InvalidPeriod> },

    /// A window bound was negative.
    #[error("{field} must not be negative, got {value}")]
    InvalidWindow { field: &'static str, value: i32 },

    /// A window bound was larger than the supported maximum.
    #[error("{field} must be at most {max}, got {value}")]
    WindowTooWide {
        field: &'static str,
        value: i32,
        max: i32,
    },

    /// The window reaches past the dates chrono can represent.
    #[error("reporting window around {reference} is outside the supported calendar range")]
    WindowOutOfRange { reference: NaiveDate },
}

impl RevenueError {
    pub fn invalid_period(id: MembershipId, violation: PeriodViolation) -> Self {
        RevenueError::InvalidPeriod {
            violations: vec![InvalidPeriod { id, violation }],
        }
    }

    pub fn invalid_window(field: &'static str, value: i32) -> Self {
        RevenueError::InvalidWindow { field, value }
    }

    /// Ids of the offending periods, empty for window errors.
    pub fn offending_ids(&self) -> Vec<MembershipId> {
        match self {
            RevenueError::InvalidPeriod { violations } => {
                violations.iter().map(|v| v.id).collect()
            }
            _ => Vec::new(),
        }
    }
}

fn describe(violations: &[InvalidPeriod]) -> String {
    violations
        .iter()
        .map(|v| format!("{} ({})", v.id, v.violation))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_period_lists_every_offender() {
        let a: MembershipId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let b: MembershipId = "550e8400-e29b-41d4-a716-446655440001".parse().unwrap();
        let err = RevenueError::InvalidPeriod {
            violations: vec![
                InvalidPeriod {
                    id: a,
                    violation: PeriodViolation::NegativePrice(-1.0),
                },
                InvalidPeriod {
                    id: b,
                    violation: PeriodViolation::NonFinitePrice,
                },
            ],
        };

        let message = err.to_string();
        assert!(message.contains(&a.to_string()));
        assert!(message.contains(&b.to_string()));
        assert!(message.contains("total price -1 is negative"));
        assert_eq!(err.offending_ids(), vec![a, b]);
    }

    #[test]
    fn invalid_window_names_the_field() {
        let err = RevenueError::invalid_window("months_before", -2);
        assert_eq!(err.to_string(), "months_before must not be negative, got -2");
        assert!(err.offending_ids().is_empty());
    }
}
