//! Payment totals for the financial dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::membership::{PaymentRecord, PaymentStatus};

/// Completed payments for one payment method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodTotal {
    pub method: String,
    pub count: u64,
    pub total: f64,
}

/// Summary of a gym's payment history.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentSummary {
    /// Completed payments grouped by method, sorted by method label.
    pub by_method: Vec<MethodTotal>,

    /// Sum of all completed payments.
    pub completed_total: f64,

    /// Sum of payments still awaiting settlement.
    pub pending_total: f64,
}

/// Totals completed payments by method and sums what is still pending.
///
/// Failed and refunded payments are ignored.
pub fn summarize_payments(payments: &[PaymentRecord]) -> PaymentSummary {
    let mut methods: BTreeMap<&str, MethodTotal> = BTreeMap::new();
    let mut summary = PaymentSummary::default();

    for payment in payments {
        match payment.status {
            PaymentStatus::Completed => {
                let entry = methods
                    .entry(payment.method.as_str())
                    .or_insert_with(|| MethodTotal {
                        method: payment.method.clone(),
                        count: 0,
                        total: 0.0,
                    });
                entry.count += 1;
                entry.total += payment.amount;
                summary.completed_total += payment.amount;
            }
            PaymentStatus::Pending => summary.pending_total += payment.amount,
            PaymentStatus::Failed | PaymentStatus::Refunded => {}
        }
    }

    summary.by_method = methods.into_values().collect();
    summary
}
