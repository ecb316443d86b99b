//! GetRevenueHistoryHandler - Query handler for the monthly revenue report.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::RevenueQueryError;
use crate::domain::foundation::GymId;
use crate::domain::revenue::{
    compute_monthly_revenue, month_window, MonthlyRevenue, RawRevenuePolicy,
};
use crate::ports::RosterProvider;

/// Query for a gym's raw and accrual revenue around a reference date.
#[derive(Debug, Clone)]
pub struct GetRevenueHistoryQuery {
    pub gym_id: GymId,
    pub reference_date: NaiveDate,
    pub months_before: i32,
    pub months_after: i32,
    pub policy: RawRevenuePolicy,
}

/// Result type for the revenue history query.
pub type GetRevenueHistoryResult = Vec<MonthlyRevenue>;

/// Handler for the revenue history report.
///
/// Loads the roster through the injected provider, then hands the snapshot
/// to the pure engine. Each call is independent.
pub struct GetRevenueHistoryHandler {
    roster: Arc<dyn RosterProvider>,
}

impl GetRevenueHistoryHandler {
    pub fn new(roster: Arc<dyn RosterProvider>) -> Self {
        Self { roster }
    }

    #[tracing::instrument(skip(self, query), fields(gym_id = %query.gym_id))]
    pub async fn handle(
        &self,
        query: GetRevenueHistoryQuery,
    ) -> Result<GetRevenueHistoryResult, RevenueQueryError> {
        // Reject a bad window before doing any I/O.
        let months = month_window(query.reference_date, query.months_before, query.months_after)?;
        let as_of = months.first().map(|month| month.start());

        let periods = self.roster.fetch_periods(&query.gym_id, as_of).await?;
        debug!(periods = periods.len(), months = months.len(), "loaded membership roster");

        compute_monthly_revenue(
            &periods,
            query.reference_date,
            query.months_before,
            query.months_after,
            query.policy,
        )
        .map_err(|err| {
            warn!(error = %err, "revenue report rejected");
            RevenueQueryError::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::membership::{MembershipPeriod, MembershipStatus, PaymentStatus};
    use crate::domain::revenue::RevenueError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockRosterProvider {
        periods: Vec<MembershipPeriod>,
        fail_read: bool,
        calls: Mutex<Vec<Option<NaiveDate>>>,
    }

    impl MockRosterProvider {
        fn with_periods(periods: Vec<MembershipPeriod>) -> Self {
            Self {
                periods,
                fail_read: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                periods: Vec::new(),
                fail_read: true,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RosterProvider for MockRosterProvider {
        async fn fetch_periods(
            &self,
            _gym_id: &GymId,
            as_of: Option<NaiveDate>,
        ) -> Result<Vec<MembershipPeriod>, DomainError> {
            self.calls.lock().unwrap().push(as_of);
            if self.fail_read {
                return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"));
            }
            Ok(self.periods.clone())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn query(months_before: i32, months_after: i32) -> GetRevenueHistoryQuery {
        GetRevenueHistoryQuery {
            gym_id: GymId::new(),
            reference_date: date(2024, 2, 14),
            months_before,
            months_after,
            policy: RawRevenuePolicy::CompletedPayment,
        }
    }

    fn split_period() -> MembershipPeriod {
        MembershipPeriod::new(
            220.0,
            date(2024, 1, 20),
            date(2024, 2, 10),
            MembershipStatus::Active,
            "Monthly",
        )
        .with_payment_status(PaymentStatus::Completed)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn returns_one_entry_per_month() {
        let roster = Arc::new(MockRosterProvider::with_periods(vec![split_period()]));
        let handler = GetRevenueHistoryHandler::new(roster);

        let report = handler.handle(query(5, 6)).await.unwrap();

        assert_eq!(report.len(), 12);
        assert_eq!(report[4].month.to_string(), "2024-01");
        assert!((report[4].accrual_revenue - 120.0).abs() < 1e-9);
        assert_eq!(report[4].raw_revenue, 220.0);
        assert_eq!(report[5].month.to_string(), "2024-02");
        assert!((report[5].accrual_revenue - 100.0).abs() < 1e-9);
        assert_eq!(report[5].raw_revenue, 0.0);
    }

    #[tokio::test]
    async fn asks_provider_for_periods_from_window_start() {
        let roster = Arc::new(MockRosterProvider::with_periods(vec![]));
        let handler = GetRevenueHistoryHandler::new(roster.clone());

        handler.handle(query(6, 6)).await.unwrap();

        assert_eq!(*roster.calls.lock().unwrap(), vec![Some(date(2023, 8, 1))]);
    }

    #[tokio::test]
    async fn empty_roster_gives_zeroes() {
        let roster = Arc::new(MockRosterProvider::with_periods(vec![]));
        let handler = GetRevenueHistoryHandler::new(roster);

        let report = handler.handle(query(1, 1)).await.unwrap();

        assert_eq!(report.len(), 3);
        assert!(report.iter().all(|m| m.raw_revenue == 0.0 && m.accrual_revenue == 0.0));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn negative_window_fails_without_fetching() {
        let roster = Arc::new(MockRosterProvider::with_periods(vec![]));
        let handler = GetRevenueHistoryHandler::new(roster.clone());

        let result = handler.handle(query(-1, 6)).await;

        assert!(matches!(
            result,
            Err(RevenueQueryError::Revenue(RevenueError::InvalidWindow { .. }))
        ));
        assert!(roster.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_period_rejects_report() {
        let mut bad = split_period();
        bad.total_price = -220.0;
        let roster = Arc::new(MockRosterProvider::with_periods(vec![split_period(), bad.clone()]));
        let handler = GetRevenueHistoryHandler::new(roster);

        let err = handler.handle(query(5, 6)).await.unwrap_err();

        match err {
            RevenueQueryError::Revenue(revenue) => assert_eq!(revenue.offending_ids(), vec![bad.id]),
            other => panic!("expected revenue error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fails_when_provider_fails() {
        let roster = Arc::new(MockRosterProvider::failing());
        let handler = GetRevenueHistoryHandler::new(roster);

        let result = handler.handle(query(5, 6)).await;

        assert!(matches!(result, Err(RevenueQueryError::Collaborator(_))));
    }
}
