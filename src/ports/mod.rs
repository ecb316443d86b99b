//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RosterProvider` - Membership periods for a gym
//! - `PaymentReader` - Payment history for a gym

mod payment_reader;
mod roster_provider;

pub use payment_reader::PaymentReader;
pub use roster_provider::RosterProvider;
