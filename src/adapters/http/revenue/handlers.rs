//! HTTP handlers for revenue endpoints.
//!
//! These handlers connect Axum routes to the revenue query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::application::handlers::revenue::{
    GetFinancialStatsHandler, GetFinancialStatsQuery, GetRevenueHistoryHandler,
    GetRevenueHistoryQuery, RevenueQueryError,
};
use crate::config::ReportingConfig;
use crate::domain::foundation::GymId;
use crate::domain::revenue::RevenueError;
use crate::ports::{PaymentReader, RosterProvider};

use super::dto::{
    ErrorResponse, FinancialStatsResponse, HistoryParams, MonthlyRevenueResponse,
    RevenueHistoryResponse, StatsParams,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the revenue endpoints.
///
/// Cloned per request; collaborators are Arc-wrapped.
#[derive(Clone)]
pub struct RevenueAppState {
    pub roster_provider: Arc<dyn RosterProvider>,
    pub payment_reader: Arc<dyn PaymentReader>,
    pub reporting: ReportingConfig,
}

impl RevenueAppState {
    pub fn new(
        roster_provider: Arc<dyn RosterProvider>,
        payment_reader: Arc<dyn PaymentReader>,
        reporting: ReportingConfig,
    ) -> Self {
        Self {
            roster_provider,
            payment_reader,
            reporting,
        }
    }

    pub fn history_handler(&self) -> GetRevenueHistoryHandler {
        GetRevenueHistoryHandler::new(self.roster_provider.clone())
    }

    pub fn stats_handler(&self) -> GetFinancialStatsHandler {
        GetFinancialStatsHandler::new(self.roster_provider.clone(), self.payment_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/gyms/:gym_id/revenue/history - Monthly raw and accrual revenue
pub async fn get_revenue_history(
    State(state): State<RevenueAppState>,
    Path(gym_id): Path<GymId>,
    Query(params): Query<HistoryParams>,
) -> Result<impl IntoResponse, RevenueApiError> {
    let reference_date = params
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let policy = params.policy.unwrap_or(state.reporting.raw_revenue_policy);

    let query = GetRevenueHistoryQuery {
        gym_id,
        reference_date,
        months_before: params.months_before.unwrap_or(state.reporting.months_before),
        months_after: params.months_after.unwrap_or(state.reporting.months_after),
        policy,
    };

    let report = state.history_handler().handle(query).await?;

    let response = RevenueHistoryResponse {
        reference_date,
        policy,
        months: report.into_iter().map(MonthlyRevenueResponse::from).collect(),
    };

    Ok(Json(response))
}

/// GET /api/gyms/:gym_id/revenue/stats - Financial dashboard snapshot
pub async fn get_financial_stats(
    State(state): State<RevenueAppState>,
    Path(gym_id): Path<GymId>,
    Query(params): Query<StatsParams>,
) -> Result<impl IntoResponse, RevenueApiError> {
    let query = GetFinancialStatsQuery {
        gym_id,
        reference_date: params
            .reference_date
            .unwrap_or_else(|| Utc::now().date_naive()),
        months_before: params.months_before.unwrap_or(state.reporting.months_before),
        months_after: params.months_after.unwrap_or(state.reporting.months_after),
        policy: params.policy.unwrap_or(state.reporting.raw_revenue_policy),
    };

    let stats = state.stats_handler().handle(query).await?;

    Ok(Json(FinancialStatsResponse::from(stats)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts query errors to HTTP responses.
#[derive(Debug)]
pub struct RevenueApiError(RevenueQueryError);

impl From<RevenueQueryError> for RevenueApiError {
    fn from(err: RevenueQueryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RevenueApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self.0 {
            RevenueQueryError::Revenue(err @ RevenueError::InvalidPeriod { .. }) => {
                let ids: Vec<String> = err.offending_ids().iter().map(|id| id.to_string()).collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::new("INVALID_PERIOD", err.to_string())
                        .with_details(serde_json::json!({ "membership_ids": ids })),
                )
            }
            RevenueQueryError::Revenue(err @ RevenueError::InvalidWindow { .. }) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_WINDOW", err.to_string()),
            ),
            RevenueQueryError::Revenue(err @ RevenueError::WindowTooWide { .. }) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("WINDOW_TOO_WIDE", err.to_string()),
            ),
            RevenueQueryError::Revenue(err @ RevenueError::WindowOutOfRange { .. }) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("WINDOW_OUT_OF_RANGE", err.to_string()),
            ),
            RevenueQueryError::Collaborator(err) => {
                tracing::error!(error = %err, "revenue data could not be loaded");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "Revenue data is temporarily unavailable"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
