//! Errors returned by revenue query handlers.

use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::revenue::RevenueError;

/// Failure of a revenue query.
///
/// Either the roster or window was rejected by the engine, or a
/// collaborator (roster provider, payment reader) failed to load data.
#[derive(Debug, Error)]
pub enum RevenueQueryError {
    #[error(transparent)]
    Revenue(#[from] RevenueError),

    #[error("failed to load revenue data: {0}")]
    Collaborator(#[from] DomainError),
}
