//! HTTP adapter for revenue endpoints.
//!
//! - `GET /api/gyms/:gym_id/revenue/history` - Monthly raw and accrual revenue
//! - `GET /api/gyms/:gym_id/revenue/stats` - Financial dashboard snapshot

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{RevenueApiError, RevenueAppState};
pub use routes::{revenue_router, revenue_routes};
