use async_trait::async_trait;

use crate::notifications::{
    domain::model::enums::notification_error::NotificationError,
    infrastructure::gcp::access_token_provider::AccessTokenProvider,
};

pub struct StaticAccessTokenProviderImpl {
    token: Option<String>,
}

impl StaticAccessTokenProviderImpl {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticAccessTokenProviderImpl {
    async fn access_token(&self) -> Result<Option<String>, NotificationError> {
        Ok(self.token.clone())
    }
}
