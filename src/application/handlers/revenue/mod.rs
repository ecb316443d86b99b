//! Revenue handlers.
//!
//! Query handlers for revenue reporting:
//!
//! ## Queries
//! - Monthly raw and accrual revenue over a window of months
//! - Financial snapshot of a single month (plans, payments)

mod errors;
mod get_financial_stats;
mod get_revenue_history;

pub use errors::RevenueQueryError;
pub use get_financial_stats::{
    FinancialStats, GetFinancialStatsHandler, GetFinancialStatsQuery,
};
pub use get_revenue_history::{
    GetRevenueHistoryHandler, GetRevenueHistoryQuery, GetRevenueHistoryResult,
};
