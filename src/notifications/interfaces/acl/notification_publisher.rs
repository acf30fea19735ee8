use async_trait::async_trait;

use crate::notifications::domain::model::enums::activity_type::ActivityType;

/// Best-effort, single-attempt activity notification.
///
/// Returns `false` when the notification was not delivered for any reason;
/// callers proceed either way.
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    async fn publish(&self, user_email: &str, activity_type: ActivityType) -> bool;
}
