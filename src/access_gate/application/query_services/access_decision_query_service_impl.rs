use std::sync::Arc;

use async_trait::async_trait;

use crate::access_gate::{
    domain::{
        model::{
            entities::login_event::LoginEvent,
            enums::access_gate_domain_error::AccessGateDomainError,
            queries::recent_logins_query::RecentLoginsQuery,
        },
        services::access_decision_query_service::AccessDecisionQueryService,
    },
    infrastructure::persistence::repositories::{
        authorized_user_repository::AuthorizedUserRepository,
        database_health_repository::DatabaseHealthRepository,
        login_event_repository::LoginEventRepository,
    },
};

pub struct AccessDecisionQueryServiceImpl {
    authorized_user_repository: Arc<dyn AuthorizedUserRepository>,
    login_event_repository: Arc<dyn LoginEventRepository>,
    database_health_repository: Arc<dyn DatabaseHealthRepository>,
}

impl AccessDecisionQueryServiceImpl {
    pub fn new(
        authorized_user_repository: Arc<dyn AuthorizedUserRepository>,
        login_event_repository: Arc<dyn LoginEventRepository>,
        database_health_repository: Arc<dyn DatabaseHealthRepository>,
    ) -> Self {
        Self {
            authorized_user_repository,
            login_event_repository,
            database_health_repository,
        }
    }
}

#[async_trait]
impl AccessDecisionQueryService for AccessDecisionQueryServiceImpl {
    async fn handle_recent_logins(
        &self,
        query: RecentLoginsQuery,
    ) -> Result<Vec<LoginEvent>, AccessGateDomainError> {
        let user = self
            .authorized_user_repository
            .find_by_email(query.email())
            .await?;

        if user.is_none() {
            tracing::debug!(email = %query.email().value(), "recent logins requested by unlisted caller");
            return Err(AccessGateDomainError::Unauthorized);
        }

        self.login_event_repository
            .find_recent_by_email(query.email(), query.limit())
            .await
    }

    async fn handle_health_check(&self) -> Result<(), AccessGateDomainError> {
        self.database_health_repository.ping().await
    }
}
