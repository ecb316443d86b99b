//! Payment reader port.

use crate::domain::foundation::{DomainError, GymId};
use crate::domain::membership::PaymentRecord;
use async_trait::async_trait;

/// Read access to a gym's payment history.
#[async_trait]
pub trait PaymentReader: Send + Sync {
    /// Returns every payment recorded for the gym, in any status.
    async fn list_payments(&self, gym_id: &GymId) -> Result<Vec<PaymentRecord>, DomainError>;
}
