//! HTTP adapters - REST API implementations.

pub mod revenue;

pub use revenue::{revenue_router, RevenueAppState};
