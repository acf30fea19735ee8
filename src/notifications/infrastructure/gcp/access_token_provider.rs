use async_trait::async_trait;

use crate::notifications::domain::model::enums::notification_error::NotificationError;

/// Supplies the bearer token for Pub/Sub calls. `None` means send the
/// request unauthenticated (emulator).
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>, NotificationError>;
}
