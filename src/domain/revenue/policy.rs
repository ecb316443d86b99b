//! Raw (cash) revenue counting policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::membership::MembershipPeriod;

/// Decides which periods count toward raw revenue in their start month.
///
/// Raw revenue always books a period's full price in the month its start
/// date falls in. The policy only decides which periods qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawRevenuePolicy {
    /// Every period, whatever its membership or payment status.
    ByStartDate,

    /// Only periods whose membership is currently active.
    ActiveByStartDate,

    /// Only periods settled by a completed payment.
    #[default]
    CompletedPayment,
}

impl RawRevenuePolicy {
    /// Returns true if `period` qualifies for raw revenue under this policy.
    pub fn counts(&self, period: &MembershipPeriod) -> bool {
        match self {
            RawRevenuePolicy::ByStartDate => true,
            RawRevenuePolicy::ActiveByStartDate => period.status.participates_in_accrual(),
            RawRevenuePolicy::CompletedPayment => period
                .payment_status
                .is_some_and(|status| status.is_completed()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RawRevenuePolicy::ByStartDate => "by_start_date",
            RawRevenuePolicy::ActiveByStartDate => "active_by_start_date",
            RawRevenuePolicy::CompletedPayment => "completed_payment",
        }
    }
}

impl fmt::Display for RawRevenuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RawRevenuePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by_start_date" => Ok(RawRevenuePolicy::ByStartDate),
            "active_by_start_date" => Ok(RawRevenuePolicy::ActiveByStartDate),
            "completed_payment" => Ok(RawRevenuePolicy::CompletedPayment),
            other => Err(format!("unknown raw revenue policy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::{MembershipStatus, PaymentStatus};
    use chrono::NaiveDate;

    fn period(status: MembershipStatus, payment: Option<PaymentStatus>) -> MembershipPeriod {
        let start = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 4, 4).unwrap();
        let mut p = MembershipPeriod::new(50.0, start, end, status, "Monthly");
        p.payment_status = payment;
        p
    }

    #[test]
    fn default_is_completed_payment() {
        assert_eq!(RawRevenuePolicy::default(), RawRevenuePolicy::CompletedPayment);
    }

    #[test]
    fn by_start_date_counts_everything() {
        let policy = RawRevenuePolicy::ByStartDate;
        assert!(policy.counts(&period(MembershipStatus::Cancelled, None)));
        assert!(policy.counts(&period(MembershipStatus::Pending, Some(PaymentStatus::Failed))));
    }

    #[test]
    fn active_by_start_date_gates_on_membership_status() {
        let policy = RawRevenuePolicy::ActiveByStartDate;
        assert!(policy.counts(&period(MembershipStatus::Active, None)));
        assert!(!policy.counts(&period(
            MembershipStatus::Cancelled,
            Some(PaymentStatus::Completed)
        )));
    }

    #[test]
    fn completed_payment_gates_on_payment_status() {
        let policy = RawRevenuePolicy::CompletedPayment;
        assert!(policy.counts(&period(
            MembershipStatus::Cancelled,
            Some(PaymentStatus::Completed)
        )));
        assert!(!policy.counts(&period(MembershipStatus::Active, Some(PaymentStatus::Pending))));
        assert!(!policy.counts(&period(MembershipStatus::Active, None)));
    }

    #[test]
    fn parses_and_serializes_snake_case() {
        for policy in [
            RawRevenuePolicy::ByStartDate,
            RawRevenuePolicy::ActiveByStartDate,
            RawRevenuePolicy::CompletedPayment,
        ] {
            assert_eq!(policy.as_str().parse::<RawRevenuePolicy>(), Ok(policy));
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy));
        }
        assert!("cash".parse::<RawRevenuePolicy>().is_err());
    }
}
