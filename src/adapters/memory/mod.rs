//! In-memory adapters for tests and local runs.

mod in_memory_roster;

pub use in_memory_roster::InMemoryRoster;
