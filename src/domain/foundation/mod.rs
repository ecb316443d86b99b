//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and the error type that form the vocabulary
//! shared by the membership and revenue domains.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode};
pub use ids::{GymId, MembershipId, PaymentId};
