use chrono::{DateTime, Utc};

pub const NOT_IN_ALLOW_LIST_REASON: &str = "User not in authorized list";

#[derive(Clone, Debug)]
pub struct UnauthorizedAccessAttemptedEvent {
    pub email: String,
    pub reason: String,
    pub ip_address: Option<String>,
    pub occurred_at: DateTime<Utc>,
}
