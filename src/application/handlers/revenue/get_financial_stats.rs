//! GetFinancialStatsHandler - Query handler for the admin financial dashboard.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::RevenueQueryError;
use crate::domain::foundation::GymId;
use crate::domain::revenue::{
    aggregate_month, compute_monthly_revenue, month_window, plan_breakdown, summarize_payments,
    CalendarMonth, MonthlyRevenue, PaymentSummary, PlanRevenue, RawRevenuePolicy, RevenueError,
};
use crate::ports::{PaymentReader, RosterProvider};

/// Query for the financial snapshot of the month containing `reference_date`.
///
/// The window bounds size the revenue series shown next to the snapshot.
#[derive(Debug, Clone)]
pub struct GetFinancialStatsQuery {
    pub gym_id: GymId,
    pub reference_date: NaiveDate,
    pub months_before: i32,
    pub months_after: i32,
    pub policy: RawRevenuePolicy,
}

/// Financial snapshot for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialStats {
    /// Raw and accrual revenue for the month.
    pub current: MonthlyRevenue,

    /// Revenue for every month of the window around the reference month.
    pub months: Vec<MonthlyRevenue>,

    /// Accrual revenue of the month split by plan.
    pub plans: Vec<PlanRevenue>,

    /// All-time payment totals.
    pub payments: PaymentSummary,
}

/// Handler for the financial dashboard query.
pub struct GetFinancialStatsHandler {
    roster: Arc<dyn RosterProvider>,
    payments: Arc<dyn PaymentReader>,
}

impl GetFinancialStatsHandler {
    pub fn new(roster: Arc<dyn RosterProvider>, payments: Arc<dyn PaymentReader>) -> Self {
        Self { roster, payments }
    }

    #[tracing::instrument(skip(self, query), fields(gym_id = %query.gym_id))]
    pub async fn handle(
        &self,
        query: GetFinancialStatsQuery,
    ) -> Result<FinancialStats, RevenueQueryError> {
        let month = CalendarMonth::containing(query.reference_date).ok_or(
            RevenueError::WindowOutOfRange {
                reference: query.reference_date,
            },
        )?;
        let window = month_window(query.reference_date, query.months_before, query.months_after)?;
        let as_of = window.first().map_or(month.start(), |first| first.start());

        // Independent reads; neither depends on the other.
        let (periods, payments) = tokio::try_join!(
            self.roster.fetch_periods(&query.gym_id, Some(as_of)),
            self.payments.list_payments(&query.gym_id)
        )?;
        debug!(
            periods = periods.len(),
            payments = payments.len(),
            "loaded financial data"
        );

        let months = compute_monthly_revenue(
            &periods,
            query.reference_date,
            query.months_before,
            query.months_after,
            query.policy,
        )?;
        let current = aggregate_month(&periods, month, query.policy)?;
        let plans = plan_breakdown(&periods, month)?;

        Ok(FinancialStats {
            current,
            months,
            plans,
            payments: summarize_payments(&payments),
        })
    }
}
