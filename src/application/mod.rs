//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Revenue reporting is read-only, so every handler here is a query handler.

pub mod handlers;

pub use handlers::revenue::{
    FinancialStats, GetFinancialStatsHandler, GetFinancialStatsQuery, GetRevenueHistoryHandler,
    GetRevenueHistoryQuery, GetRevenueHistoryResult, RevenueQueryError,
};
