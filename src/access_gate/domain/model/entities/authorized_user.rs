use chrono::{DateTime, Utc};

/// Allow-list entry. Rows are managed outside this service.
#[derive(Clone, Debug)]
pub struct AuthorizedUser {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
