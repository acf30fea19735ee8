use chrono::{DateTime, Utc};

#[derive(Clone, Debug)]
pub struct LoginSucceededEvent {
    pub email: String,
    pub ip_address: Option<String>,
    pub occurred_at: DateTime<Utc>,
}
