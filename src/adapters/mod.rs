//! Adapters - Implementations of port interfaces.
//!
//! - `postgres` - PostgreSQL readers for the roster and payments
//! - `memory` - In-memory roster for tests and local runs
//! - `http` - Axum routes exposing the revenue queries

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryRoster;
pub use postgres::{PostgresPaymentReader, PostgresRosterReader};
