//! Payment records as seen by revenue reporting.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, PaymentId};

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    /// Returns true if the money has actually been received.
    pub fn is_completed(&self) -> bool {
        matches!(self, PaymentStatus::Completed)
    }

    /// Returns the stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Refunded => "REFUNDED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(PaymentStatus::Pending),
            "COMPLETED" => Ok(PaymentStatus::Completed),
            "FAILED" => Ok(PaymentStatus::Failed),
            "REFUNDED" => Ok(PaymentStatus::Refunded),
            _ => Err(DomainError::invalid_format("payment status", s)),
        }
    }
}

/// A single payment taken by a gym.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentId,

    /// Amount charged, in the gym's currency.
    pub amount: f64,

    /// Calendar day the payment was recorded.
    pub paid_on: NaiveDate,

    pub status: PaymentStatus,

    /// Free-form payment method label, e.g. "card" or "cash".
    pub method: String,
}

impl PaymentRecord {
    pub fn new(
        amount: f64,
        paid_on: NaiveDate,
        status: PaymentStatus,
        method: impl Into<String>,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            amount,
            paid_on,
            status,
            method: method.into(),
        }
    }
}
