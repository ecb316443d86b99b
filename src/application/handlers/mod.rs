//! Application handlers.
//!
//! Query handlers that load data through ports and run domain calculations.

pub mod revenue;
