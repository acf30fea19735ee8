use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::notifications::domain::model::enums::activity_type::ActivityType;

/// Envelope published to the notification topic for every gate activity.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserActivityNotificationEvent {
    pub user_email: String,
    pub activity_type: String,
    pub timestamp: String,
    pub message: String,
}

impl UserActivityNotificationEvent {
    pub fn new(user_email: &str, activity_type: ActivityType, occurred_at: DateTime<Utc>) -> Self {
        Self {
            user_email: user_email.to_string(),
            activity_type: activity_type.as_str().to_string(),
            timestamp: occurred_at.to_rfc3339(),
            message: format!("{activity_type} by {user_email}"),
        }
    }
}
