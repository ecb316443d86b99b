//! In-memory roster implementation.
//!
//! This adapter implements both the `RosterProvider` and `PaymentReader`
//! ports over plain vectors keyed by gym. Useful for:
//! - Unit and integration tests of handlers and HTTP routes
//! - Local runs without a database
//!
//! Data does not survive a restart.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, GymId};
use crate::domain::membership::{MembershipPeriod, PaymentRecord};
use crate::ports::{PaymentReader, RosterProvider};

/// In-memory store of membership periods and payments per gym.
///
/// # Example
///
/// ```ignore
/// let roster = InMemoryRoster::new();
/// roster.add_period(gym_id, period)?;
/// let periods = roster.fetch_periods(&gym_id, None).await?;
/// ```
#[derive(Default)]
pub struct InMemoryRoster {
    periods: RwLock<HashMap<GymId, Vec<MembershipPeriod>>>,
    payments: RwLock<HashMap<GymId, Vec<PaymentRecord>>>,
}

impl InMemoryRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a membership period for a gym.
    pub fn add_period(&self, gym_id: GymId, period: MembershipPeriod) -> Result<(), DomainError> {
        self.periods
            .write()
            .map_err(|_| poisoned("periods"))?
            .entry(gym_id)
            .or_default()
            .push(period);
        Ok(())
    }

    /// Records a payment for a gym.
    pub fn add_payment(&self, gym_id: GymId, payment: PaymentRecord) -> Result<(), DomainError> {
        self.payments
            .write()
            .map_err(|_| poisoned("payments"))?
            .entry(gym_id)
            .or_default()
            .push(payment);
        Ok(())
    }
}

fn poisoned(store: &str) -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        format!("InMemoryRoster: {} lock poisoned", store),
    )
}

#[async_trait]
impl RosterProvider for InMemoryRoster {
    async fn fetch_periods(
        &self,
        gym_id: &GymId,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<MembershipPeriod>, DomainError> {
        let periods = self.periods.read().map_err(|_| poisoned("periods"))?;
        Ok(periods
            .get(gym_id)
            .map(|all| {
                all.iter()
                    // Reversed periods always pass so validation can reject them.
                    .filter(|p| {
                        as_of.map_or(true, |day| p.end_date >= day || p.end_date < p.start_date)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl PaymentReader for InMemoryRoster {
    async fn list_payments(&self, gym_id: &GymId) -> Result<Vec<PaymentRecord>, DomainError> {
        let payments = self.payments.read().map_err(|_| poisoned("payments"))?;
        Ok(payments.get(gym_id).cloned().unwrap_or_default())
    }
}
