use async_trait::async_trait;

use crate::access_gate::domain::model::enums::access_gate_domain_error::AccessGateDomainError;

#[async_trait]
pub trait DatabaseHealthRepository: Send + Sync {
    async fn ping(&self) -> Result<(), AccessGateDomainError>;
}
