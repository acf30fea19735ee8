use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::access_gate::domain::model::entities::login_event::LoginEvent;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LoginLogResource {
    pub id: i64,
    pub timestamp: String,
    pub ip: Option<String>,
}

impl From<LoginEvent> for LoginLogResource {
    fn from(event: LoginEvent) -> Self {
        Self {
            id: event.id,
            timestamp: event.timestamp.to_rfc3339(),
            ip: event.ip_address,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LoginLogsResponseResource {
    pub logs: Vec<LoginLogResource>,
}
