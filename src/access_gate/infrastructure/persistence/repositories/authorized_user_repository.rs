use async_trait::async_trait;

use crate::access_gate::domain::model::{
    entities::authorized_user::AuthorizedUser,
    enums::access_gate_domain_error::AccessGateDomainError, value_objects::user_email::UserEmail,
};

#[async_trait]
pub trait AuthorizedUserRepository: Send + Sync {
    async fn find_by_email(
        &self,
        email: &UserEmail,
    ) -> Result<Option<AuthorizedUser>, AccessGateDomainError>;
}
