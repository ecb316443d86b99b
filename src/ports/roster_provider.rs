//! Roster provider port.
//!
//! Supplies the membership periods a revenue report is computed from.
//! The engine never fetches data itself; handlers receive an implementation
//! of this port and pass the resulting snapshot to the pure calculation.
//!
//! # Example
//!
//! ```ignore
//! async fn current_accrual(
//!     roster: &dyn RosterProvider,
//!     gym_id: &GymId,
//!     month: CalendarMonth,
//! ) -> Result<f64, Box<dyn std::error::Error>> {
//!     let periods = roster.fetch_periods(gym_id, Some(month.start())).await?;
//!     Ok(aggregate_month(&periods, month, RawRevenuePolicy::default())?.accrual_revenue)
//! }
//! ```

use crate::domain::foundation::{DomainError, GymId};
use crate::domain::membership::MembershipPeriod;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Source of membership periods for a gym.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// Returns the gym's membership periods.
    ///
    /// With `as_of` set, periods that ended before that day are left out:
    /// they can contribute nothing to a report whose first month starts on
    /// or after it. With `None`, every period is returned.
    async fn fetch_periods(
        &self,
        gym_id: &GymId,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<MembershipPeriod>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn RosterProvider) {}
    }
}
