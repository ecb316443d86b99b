//! Membership period - the unit of revenue recognition.
//!
//! A period is one paid stretch of membership with a fixed total price.
//! Both ends are inclusive calendar days, so a period starting and ending
//! on the same day lasts one day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{MembershipStatus, PaymentStatus};
use crate::domain::foundation::MembershipId;

/// Reasons a stored period cannot take part in revenue calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PeriodViolation {
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("total price {0} is negative")]
    NegativePrice(f64),

    #[error("total price is not a finite number")]
    NonFinitePrice,
}

/// A price-bearing membership period, read from the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipPeriod {
    pub id: MembershipId,

    /// Full price charged for the entire period.
    pub total_price: f64,

    /// First day of the period (inclusive).
    pub start_date: NaiveDate,

    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,

    pub status: MembershipStatus,

    /// Plan display name. Only used for grouping.
    pub plan_label: String,

    /// Status of the payment that settled this period, if any was taken.
    pub payment_status: Option<PaymentStatus>,
}

impl MembershipPeriod {
    /// Creates a period with a fresh id and no linked payment.
    ///
    /// No validation happens here; stored rows are checked by
    /// [`MembershipPeriod::validate`] when a report is computed.
    pub fn new(
        total_price: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: MembershipStatus,
        plan_label: impl Into<String>,
    ) -> Self {
        Self {
            id: MembershipId::new(),
            total_price,
            start_date,
            end_date,
            status,
            plan_label: plan_label.into(),
            payment_status: None,
        }
    }

    /// Sets the status of the settling payment.
    pub fn with_payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    /// Checks the date range and price preconditions.
    pub fn validate(&self) -> Result<(), PeriodViolation> {
        if self.end_date < self.start_date {
            return Err(PeriodViolation::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if !self.total_price.is_finite() {
            return Err(PeriodViolation::NonFinitePrice);
        }
        if self.total_price < 0.0 {
            return Err(PeriodViolation::NegativePrice(self.total_price));
        }
        Ok(())
    }

    /// Number of days in the period, counting both ends.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Price earned per day, kept at full precision.
    pub fn daily_rate(&self) -> f64 {
        self.total_price / self.total_days() as f64
    }
}
