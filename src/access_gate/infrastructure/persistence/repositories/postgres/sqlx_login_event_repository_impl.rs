use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::access_gate::{
    domain::model::{
        entities::login_event::LoginEvent,
        enums::access_gate_domain_error::AccessGateDomainError,
        events::login_succeeded_event::LoginSucceededEvent, value_objects::user_email::UserEmail,
    },
    infrastructure::persistence::repositories::login_event_repository::LoginEventRepository,
};

pub struct SqlxLoginEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxLoginEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<LoginEvent, AccessGateDomainError> {
        let id: i64 = row.try_get("id").map_err(map_infra_error)?;
        let email: String = row.try_get("email").map_err(map_infra_error)?;
        let timestamp: DateTime<Utc> = row.try_get("timestamp").map_err(map_infra_error)?;
        let ip_address: Option<String> = row.try_get("ip_address").map_err(map_infra_error)?;

        Ok(LoginEvent {
            id,
            email,
            timestamp,
            ip_address,
        })
    }
}

#[async_trait]
impl LoginEventRepository for SqlxLoginEventRepositoryImpl {
    async fn append(&self, event: &LoginSucceededEvent) -> Result<i64, AccessGateDomainError> {
        let statement = r#"
            INSERT INTO login_logs (email, timestamp, ip_address)
            VALUES ($1, $2, $3)
            RETURNING id
        "#;

        sqlx::query_scalar::<_, i64>(statement)
            .bind(&event.email)
            .bind(event.occurred_at)
            .bind(&event.ip_address)
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)
    }

    async fn find_recent_by_email(
        &self,
        email: &UserEmail,
        limit: i64,
    ) -> Result<Vec<LoginEvent>, AccessGateDomainError> {
        let statement = r#"
            SELECT id, email, timestamp, ip_address
            FROM login_logs
            WHERE email = $1
            ORDER BY timestamp DESC, id DESC
            LIMIT $2
        "#;

        let rows = sqlx::query(statement)
            .bind(email.value())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> AccessGateDomainError {
    AccessGateDomainError::InfrastructureError(error.to_string())
}
