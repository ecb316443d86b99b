//! Gym Revenue - Accrual revenue reporting for multi-tenant gyms
//!
//! Computes, per calendar month, the raw revenue booked from membership
//! sales and the accrual revenue earned by prorating each membership's
//! price across the days it covers.
//!
//! - `domain` - Membership model and the pure revenue engine
//! - `ports` - Traits for roster and payment collaborators
//! - `application` - Query handlers orchestrating ports and engine
//! - `adapters` - PostgreSQL, in-memory and HTTP implementations
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
