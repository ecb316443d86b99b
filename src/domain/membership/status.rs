//! Membership status.
//!
//! Stored as upper-case strings (`ACTIVE`, `CANCELLED`, ...) by the
//! subscription workflow; this module only reads them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// Lifecycle state of a membership period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    /// Created at checkout, payment not yet confirmed.
    Pending,

    /// Paid and running.
    Active,

    /// Cancelled by the member or an administrator.
    Cancelled,

    /// Ran past its end date.
    Expired,
}

impl MembershipStatus {
    /// Returns true if periods in this state earn accrual revenue.
    ///
    /// Only active periods are recognized; pending periods have not been
    /// paid and cancelled or expired ones no longer earn.
    pub fn participates_in_accrual(&self) -> bool {
        matches!(self, MembershipStatus::Active)
    }

    /// Returns the stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Pending => "PENDING",
            MembershipStatus::Active => "ACTIVE",
            MembershipStatus::Cancelled => "CANCELLED",
            MembershipStatus::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(MembershipStatus::Pending),
            "ACTIVE" => Ok(MembershipStatus::Active),
            "CANCELLED" => Ok(MembershipStatus::Cancelled),
            "EXPIRED" => Ok(MembershipStatus::Expired),
            _ => Err(DomainError::invalid_format("membership status", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_participates_in_accrual() {
        assert!(MembershipStatus::Active.participates_in_accrual());
        assert!(!MembershipStatus::Pending.participates_in_accrual());
        assert!(!MembershipStatus::Cancelled.participates_in_accrual());
        assert!(!MembershipStatus::Expired.participates_in_accrual());
    }

    #[test]
    fn parses_stored_values_case_insensitively() {
        assert_eq!("ACTIVE".parse::<MembershipStatus>().unwrap(), MembershipStatus::Active);
        assert_eq!(
            "cancelled".parse::<MembershipStatus>().unwrap(),
            MembershipStatus::Cancelled
        );
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("PAUSED".parse::<MembershipStatus>().is_err());
    }

    #[test]
    fn serializes_in_stored_form() {
        let json = serde_json::to_string(&MembershipStatus::Expired).unwrap();
        assert_eq!(json, "\"EXPIRED\"");
    }

    #[test]
    fn display_matches_as_str() {
        for status in [
            MembershipStatus::Pending,
            MembershipStatus::Active,
            MembershipStatus::Cancelled,
            MembershipStatus::Expired,
        ] {
            assert_eq!(status.to_string(), status.as_str());
            assert_eq!(status.as_str().parse::<MembershipStatus>().unwrap(), status);
        }
    }
}
