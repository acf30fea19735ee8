use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::access_gate::{
    domain::model::{
        entities::authorized_user::AuthorizedUser,
        enums::access_gate_domain_error::AccessGateDomainError,
        value_objects::user_email::UserEmail,
    },
    infrastructure::persistence::repositories::authorized_user_repository::AuthorizedUserRepository,
};

pub struct SqlxAuthorizedUserRepositoryImpl {
    pool: PgPool,
}

impl SqlxAuthorizedUserRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<AuthorizedUser, AccessGateDomainError> {
        let id: i64 = row.try_get("id").map_err(map_infra_error)?;
        let email: String = row.try_get("email").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        Ok(AuthorizedUser {
            id,
            email,
            created_at,
        })
    }
}

#[async_trait]
impl AuthorizedUserRepository for SqlxAuthorizedUserRepositoryImpl {
    async fn find_by_email(
        &self,
        email: &UserEmail,
    ) -> Result<Option<AuthorizedUser>, AccessGateDomainError> {
        let statement = r#"
            SELECT id, email, created_at
            FROM users
            WHERE email = $1
            LIMIT 1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(email.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }
}

fn map_infra_error(error: sqlx::Error) -> AccessGateDomainError {
    AccessGateDomainError::InfrastructureError(error.to_string())
}
