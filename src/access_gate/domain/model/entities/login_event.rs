use chrono::{DateTime, Utc};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoginEvent {
    pub id: i64,
    pub email: String,
    pub timestamp: DateTime<Utc>,
    pub ip_address: Option<String>,
}
