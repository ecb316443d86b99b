//! Membership domain module.
//!
//! Read-side view of memberships and payments: the records revenue
//! reporting consumes. Creating, renewing and cancelling memberships is
//! owned by the subscription workflow elsewhere.
//!
//! # Module Structure
//!
//! - `period` - MembershipPeriod, the unit of revenue recognition
//! - `status` - MembershipStatus
//! - `payment` - PaymentRecord and PaymentStatus

mod payment;
mod period;
mod status;

pub use payment::{PaymentRecord, PaymentStatus};
pub use period::{MembershipPeriod, PeriodViolation};
pub use status::MembershipStatus;
