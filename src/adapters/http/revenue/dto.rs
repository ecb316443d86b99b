//! Data Transfer Objects for revenue endpoints.
//!
//! Amounts are kept at full precision by the engine and rounded to cents
//! only here, on the way out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::revenue::FinancialStats;
use crate::domain::revenue::{
    round_currency, MethodTotal, MonthlyRevenue, PaymentSummary, PlanRevenue, RawRevenuePolicy,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query string for `GET /revenue/history`.
///
/// Missing fields fall back to today and the configured reporting defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    pub reference_date: Option<NaiveDate>,
    pub months_before: Option<i32>,
    pub months_after: Option<i32>,
    pub policy: Option<RawRevenuePolicy>,
}

/// Query string for `GET /revenue/stats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsParams {
    pub reference_date: Option<NaiveDate>,
    pub months_before: Option<i32>,
    pub months_after: Option<i32>,
    pub policy: Option<RawRevenuePolicy>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One month of the revenue report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenueResponse {
    /// Month label, `YYYY-MM`.
    pub month: String,
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub raw_revenue: f64,
    pub accrual_revenue: f64,
}

impl From<MonthlyRevenue> for MonthlyRevenueResponse {
    fn from(entry: MonthlyRevenue) -> Self {
        Self {
            month: entry.month.to_string(),
            month_start: entry.month.start(),
            month_end: entry.month.end(),
            raw_revenue: round_currency(entry.raw_revenue),
            accrual_revenue: round_currency(entry.accrual_revenue),
        }
    }
}

/// Revenue report over a window of months.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueHistoryResponse {
    pub reference_date: NaiveDate,
    pub policy: RawRevenuePolicy,
    pub months: Vec<MonthlyRevenueResponse>,
}

/// Accrual revenue of one plan in the reference month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRevenueResponse {
    pub plan: String,
    pub count: u64,
    pub total_price: f64,
    pub monthly_accrual: f64,
}

impl From<PlanRevenue> for PlanRevenueResponse {
    fn from(plan: PlanRevenue) -> Self {
        Self {
            plan: plan.plan_label,
            count: plan.count,
            total_price: round_currency(plan.total_price),
            monthly_accrual: round_currency(plan.monthly_accrual),
        }
    }
}

/// Completed payments taken through one method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodTotalResponse {
    pub method: String,
    pub count: u64,
    pub total: f64,
}

impl From<MethodTotal> for MethodTotalResponse {
    fn from(total: MethodTotal) -> Self {
        Self {
            method: total.method,
            count: total.count,
            total: round_currency(total.total),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentSummaryResponse {
    pub by_method: Vec<MethodTotalResponse>,
    pub completed_total: f64,
    pub pending_total: f64,
}

impl From<PaymentSummary> for PaymentSummaryResponse {
    fn from(summary: PaymentSummary) -> Self {
        Self {
            by_method: summary.by_method.into_iter().map(Into::into).collect(),
            completed_total: round_currency(summary.completed_total),
            pending_total: round_currency(summary.pending_total),
        }
    }
}

/// Financial dashboard snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialStatsResponse {
    pub current: MonthlyRevenueResponse,
    pub months: Vec<MonthlyRevenueResponse>,
    pub plans: Vec<PlanRevenueResponse>,
    pub payments: PaymentSummaryResponse,
}

impl From<FinancialStats> for FinancialStatsResponse {
    fn from(stats: FinancialStats) -> Self {
        Self {
            current: stats.current.into(),
            months: stats.months.into_iter().map(Into::into).collect(),
            plans: stats.plans.into_iter().map(Into::into).collect(),
            payments: stats.payments.into(),
        }
    }
}

/// Error body returned by every revenue endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
