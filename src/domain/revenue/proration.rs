//! Per-day proration of a membership period into a calendar month.
//!
//! A period earns `total_price / total_days` for each of its days. The
//! share attributed to a month is that daily rate times the number of the
//! period's days falling inside the month. Nothing is rounded here; the
//! daily rate keeps full precision so month shares add back up to the
//! total price.

use serde::Serialize;

use super::{CalendarMonth, RevenueError};
use crate::domain::membership::MembershipPeriod;

/// One period's contribution to one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Proration {
    pub daily_rate: f64,
    pub overlap_days: i64,
    pub monthly_accrual: f64,
}

/// Days of `period` that fall inside `month`, zero when they do not meet.
///
/// Ignores status. Assumes the period has already been validated.
pub fn overlap_days(period: &MembershipPeriod, month: &CalendarMonth) -> i64 {
    if period.start_date > month.end() || period.end_date < month.start() {
        return 0;
    }
    let first = period.start_date.max(month.start());
    let last = period.end_date.min(month.end());
    (last - first).num_days() + 1
}

/// Computes what `period` contributes to `month`.
///
/// Returns `Ok(None)` when the period is not active or does not meet the
/// month, and `InvalidPeriod` when the period itself is malformed.
pub fn prorate(
    period: &MembershipPeriod,
    month: &CalendarMonth,
) -> Result<Option<Proration>, RevenueError> {
    period
        .validate()
        .map_err(|violation| RevenueError::invalid_period(period.id, violation))?;
    Ok(accrue(period, month))
}

/// Proration for a period already known to be valid.
pub(crate) fn accrue(period: &MembershipPeriod, month: &CalendarMonth) -> Option<Proration> {
    if !period.status.participates_in_accrual() {
        return None;
    }
    let overlap = overlap_days(period, month);
    if overlap == 0 {
        return None;
    }
    let daily_rate = period.daily_rate();
    Some(Proration {
        daily_rate,
        overlap_days: overlap,
        monthly_accrual: daily_rate * overlap as f64,
    })
}
