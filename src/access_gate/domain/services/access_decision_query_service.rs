use async_trait::async_trait;

use crate::access_gate::domain::model::{
    entities::login_event::LoginEvent, enums::access_gate_domain_error::AccessGateDomainError,
    queries::recent_logins_query::RecentLoginsQuery,
};

#[async_trait]
pub trait AccessDecisionQueryService: Send + Sync {
    async fn handle_recent_logins(
        &self,
        query: RecentLoginsQuery,
    ) -> Result<Vec<LoginEvent>, AccessGateDomainError>;

    async fn handle_health_check(&self) -> Result<(), AccessGateDomainError>;
}
