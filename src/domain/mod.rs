//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `membership` - Membership periods, statuses and payment records
//! - `revenue` - Calendar windows, proration and monthly revenue reports

pub mod foundation;
pub mod membership;
pub mod revenue;
