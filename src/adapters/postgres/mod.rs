//! PostgreSQL adapters - Database implementations for the read ports.
//!
//! - `PostgresRosterReader` - Membership periods with plan and payment status
//! - `PostgresPaymentReader` - Payment history per gym

mod payment_reader;
mod roster_reader;

pub use payment_reader::PostgresPaymentReader;
pub use roster_reader::PostgresRosterReader;
