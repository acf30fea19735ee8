use async_trait::async_trait;
use sqlx::PgPool;

use crate::access_gate::{
    domain::model::{
        enums::access_gate_domain_error::AccessGateDomainError,
        events::unauthorized_access_attempted_event::UnauthorizedAccessAttemptedEvent,
    },
    infrastructure::persistence::repositories::unauthorized_access_event_repository::UnauthorizedAccessEventRepository,
};

pub struct SqlxUnauthorizedAccessEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxUnauthorizedAccessEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnauthorizedAccessEventRepository for SqlxUnauthorizedAccessEventRepositoryImpl {
    async fn append(
        &self,
        event: &UnauthorizedAccessAttemptedEvent,
    ) -> Result<i64, AccessGateDomainError> {
        let statement = r#"
            INSERT INTO unauthorized_access_logs (email, timestamp, reason, ip_address)
            VALUES ($1, $2, $3, $4)
            RETURNING id
        "#;

        sqlx::query_scalar::<_, i64>(statement)
            .bind(&event.email)
            .bind(event.occurred_at)
            .bind(&event.reason)
            .bind(&event.ip_address)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AccessGateDomainError::InfrastructureError(e.to_string()))
    }
}
