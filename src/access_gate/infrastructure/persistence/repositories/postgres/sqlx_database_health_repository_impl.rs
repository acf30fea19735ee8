use async_trait::async_trait;
use sqlx::PgPool;

use crate::access_gate::{
    domain::model::enums::access_gate_domain_error::AccessGateDomainError,
    infrastructure::persistence::repositories::database_health_repository::DatabaseHealthRepository,
};

pub struct SqlxDatabaseHealthRepositoryImpl {
    pool: PgPool,
}

impl SqlxDatabaseHealthRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseHealthRepository for SqlxDatabaseHealthRepositoryImpl {
    async fn ping(&self) -> Result<(), AccessGateDomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AccessGateDomainError::InfrastructureError(e.to_string()))?;

        Ok(())
    }
}
