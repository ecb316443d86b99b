//! Axum router configuration for revenue endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_financial_stats, get_revenue_history, RevenueAppState};

/// Routes relative to a single gym.
///
/// # Routes
/// - `GET /history` - Monthly raw and accrual revenue around a reference date
/// - `GET /stats` - Current-month revenue, revenue series, plan breakdown and payment totals
pub fn revenue_routes() -> Router<RevenueAppState> {
    Router::new()
        .route("/history", get(get_revenue_history))
        .route("/stats", get(get_financial_stats))
}

/// Create the revenue module router, mounted under `/api/gyms/:gym_id/revenue`.
///
/// # Example
///
/// ```ignore
/// let app = revenue_router().with_state(state);
/// ```
pub fn revenue_router() -> Router<RevenueAppState> {
    Router::new().nest("/api/gyms/:gym_id/revenue", revenue_routes())
}
