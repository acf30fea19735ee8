use async_trait::async_trait;

use crate::access_gate::domain::model::{
    entities::login_event::LoginEvent, enums::access_gate_domain_error::AccessGateDomainError,
    events::login_succeeded_event::LoginSucceededEvent, value_objects::user_email::UserEmail,
};

#[async_trait]
pub trait LoginEventRepository: Send + Sync {
    /// Returns the id of the appended row once it is visible to readers.
    async fn append(&self, event: &LoginSucceededEvent) -> Result<i64, AccessGateDomainError>;

    /// Newest first, at most `limit` rows.
    async fn find_recent_by_email(
        &self,
        email: &UserEmail,
        limit: i64,
    ) -> Result<Vec<LoginEvent>, AccessGateDomainError>;
}
