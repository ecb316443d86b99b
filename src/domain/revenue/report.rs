//! Monthly revenue report over a window of months.

use chrono::NaiveDate;

use super::aggregator::month_entry;
use super::errors::InvalidPeriod;
use super::{month_window, MonthlyRevenue, RawRevenuePolicy, RevenueError};
use crate::domain::membership::MembershipPeriod;

/// Checks every period and reports all malformed ones at once.
pub fn validate_roster(periods: &[MembershipPeriod]) -> Result<(), RevenueError> {
    let violations: Vec<InvalidPeriod> = periods
        .iter()
        .filter_map(|period| {
            period.validate().err().map(|violation| InvalidPeriod {
                id: period.id,
                violation,
            })
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(RevenueError::InvalidPeriod { violations })
    }
}

/// Computes raw and accrual revenue for each month around `reference`.
///
/// The roster is validated up front; one malformed period fails the whole
/// report. Entries come back in chronological order, one per month of
/// [`month_window`]. An empty roster yields zeroes.
pub fn compute_monthly_revenue(
    periods: &[MembershipPeriod],
    reference: NaiveDate,
    months_before: i32,
    months_after: i32,
    policy: RawRevenuePolicy,
) -> Result<Vec<MonthlyRevenue>, RevenueError> {
    let months = month_window(reference, months_before, months_after)?;
    validate_roster(periods)?;

    Ok(months
        .into_iter()
        .map(|month| month_entry(periods, month, policy))
        .collect())
}
