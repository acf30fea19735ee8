use async_trait::async_trait;

use crate::access_gate::domain::model::{
    enums::access_gate_domain_error::AccessGateDomainError,
    events::unauthorized_access_attempted_event::UnauthorizedAccessAttemptedEvent,
};

#[async_trait]
pub trait UnauthorizedAccessEventRepository: Send + Sync {
    async fn append(
        &self,
        event: &UnauthorizedAccessAttemptedEvent,
    ) -> Result<i64, AccessGateDomainError>;
}
