//! Per-month revenue aggregation over a roster of periods.

use std::collections::BTreeMap;

use serde::Serialize;

use super::proration::accrue;
use super::report::validate_roster;
use super::{CalendarMonth, RawRevenuePolicy, RevenueError};
use crate::domain::membership::MembershipPeriod;

/// Raw and accrual revenue for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub month: CalendarMonth,

    /// Full prices of qualifying periods that start in this month.
    pub raw_revenue: f64,

    /// Prorated share of every active period overlapping this month.
    pub accrual_revenue: f64,
}

/// Accrual contributions of one plan to one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRevenue {
    pub plan_label: String,

    /// Periods of this plan that earn in the month.
    pub count: u64,

    /// Sum of their full-period prices.
    pub total_price: f64,

    /// Sum of their prorated shares for the month.
    pub monthly_accrual: f64,
}

/// Aggregates raw and accrual revenue for a single month.
pub fn aggregate_month(
    periods: &[MembershipPeriod],
    month: CalendarMonth,
    policy: RawRevenuePolicy,
) -> Result<MonthlyRevenue, RevenueError> {
    validate_roster(periods)?;
    Ok(month_entry(periods, month, policy))
}

/// Groups the month's accrual contributions by plan label.
///
/// Plans with no earning period in the month are omitted. Output is
/// sorted by label.
pub fn plan_breakdown(
    periods: &[MembershipPeriod],
    month: CalendarMonth,
) -> Result<Vec<PlanRevenue>, RevenueError> {
    validate_roster(periods)?;

    let mut plans: BTreeMap<&str, PlanRevenue> = BTreeMap::new();
    for period in periods {
        let Some(proration) = accrue(period, &month) else {
            continue;
        };
        let entry = plans
            .entry(period.plan_label.as_str())
            .or_insert_with(|| PlanRevenue {
                plan_label: period.plan_label.clone(),
                count: 0,
                total_price: 0.0,
                monthly_accrual: 0.0,
            });
        entry.count += 1;
        entry.total_price += period.total_price;
        entry.monthly_accrual += proration.monthly_accrual;
    }

    Ok(plans.into_values().collect())
}

/// Month aggregation for a roster that has already been validated.
pub(crate) fn month_entry(
    periods: &[MembershipPeriod],
    month: CalendarMonth,
    policy: RawRevenuePolicy,
) -> MonthlyRevenue {
    let raw_revenue = periods
        .iter()
        .filter(|p| month.contains(p.start_date) && policy.counts(p))
        .fold(0.0, |total, p| total + p.total_price);

    let accrual_revenue = periods
        .iter()
        .filter_map(|p| accrue(p, &month))
        .fold(0.0, |total, p| total + p.monthly_accrual);

    MonthlyRevenue {
        month,
        raw_revenue,
        accrual_revenue,
    }
}
