//! PostgreSQL implementation of PaymentReader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, GymId, PaymentId};
use crate::domain::membership::{PaymentRecord, PaymentStatus};
use crate::ports::PaymentReader;

/// PostgreSQL implementation of the PaymentReader port.
pub struct PostgresPaymentReader {
    pool: PgPool,
}

impl PostgresPaymentReader {
    /// Creates a new PostgresPaymentReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    amount: f64,
    status: String,
    payment_method: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for PaymentRecord {
    type Error = DomainError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let status: PaymentStatus = row.status.parse()?;

        Ok(PaymentRecord {
            id: PaymentId::from_uuid(row.id),
            amount: row.amount,
            paid_on: row.created_at.date_naive(),
            status,
            method: row.payment_method,
        })
    }
}

#[async_trait]
impl PaymentReader for PostgresPaymentReader {
    async fn list_payments(&self, gym_id: &GymId) -> Result<Vec<PaymentRecord>, DomainError> {
        let rows: Vec<PaymentRow> = sqlx::query_as(
            r#"
            SELECT pay.id, pay.amount::float8 AS amount, pay.status, pay.payment_method, pay.created_at
            FROM payments pay
            JOIN users u ON u.id = pay.user_id
            WHERE u.gym_id = $1
            ORDER BY pay.created_at ASC
            "#,
        )
        .bind(*gym_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list payments: {}", e)))?;

        rows.into_iter().map(PaymentRecord::try_from).collect()
    }
}
