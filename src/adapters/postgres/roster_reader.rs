//! PostgreSQL implementation of RosterProvider.
//!
//! Reads a gym's membership periods together with their plan and the
//! status of the latest payment linked to each membership.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, GymId, MembershipId};
use crate::domain::membership::{MembershipPeriod, MembershipStatus, PaymentStatus};
use crate::ports::RosterProvider;

/// PostgreSQL implementation of the RosterProvider port.
pub struct PostgresRosterReader {
    pool: PgPool,
}

impl PostgresRosterReader {
    /// Creates a new PostgresRosterReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for membership period queries.
#[derive(Debug, sqlx::FromRow)]
struct MembershipPeriodRow {
    id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
    plan_name: String,
    plan_price: f64,
    payment_status: Option<String>,
}

impl TryFrom<MembershipPeriodRow> for MembershipPeriod {
    type Error = DomainError;

    fn try_from(row: MembershipPeriodRow) -> Result<Self, Self::Error> {
        let status: MembershipStatus = row.status.parse()?;
        let payment_status = row
            .payment_status
            .as_deref()
            .map(str::parse::<PaymentStatus>)
            .transpose()?;

        Ok(MembershipPeriod {
            id: MembershipId::from_uuid(row.id),
            total_price: row.plan_price,
            start_date: row.start_date,
            end_date: row.end_date,
            status,
            plan_label: row.plan_name,
            payment_status,
        })
    }
}

#[async_trait]
impl RosterProvider for PostgresRosterReader {
    async fn fetch_periods(
        &self,
        gym_id: &GymId,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<MembershipPeriod>, DomainError> {
        let rows: Vec<MembershipPeriodRow> = sqlx::query_as(
            r#"
            SELECT
                m.id,
                m.start_date,
                m.end_date,
                m.status,
                p.name AS plan_name,
                p.price::float8 AS plan_price,
                pay.status AS payment_status
            FROM memberships m
            JOIN users u ON u.id = m.user_id
            JOIN membership_plans p ON p.id = m.plan_id
            LEFT JOIN LATERAL (
                SELECT status
                FROM payments
                WHERE membership_id = m.id
                ORDER BY created_at DESC
                LIMIT 1
            ) pay ON TRUE
            WHERE u.gym_id = $1
              AND u.role = 'MEMBER'
              AND ($2::date IS NULL OR m.end_date >= $2 OR m.end_date < m.start_date)
            ORDER BY m.start_date ASC
            "#,
        )
        .bind(*gym_id.as_uuid())
        .bind(as_of)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load membership roster: {}", e)))?;

        rows.into_iter().map(MembershipPeriod::try_from).collect()
    }
}
