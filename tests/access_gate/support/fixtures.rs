use std::net::SocketAddr;

use iap_access_gate::access_gate::domain::model::{
    commands::{
        decide_access_command::DecideAccessCommand,
        request_manual_notification_command::RequestManualNotificationCommand,
    },
    queries::recent_logins_query::RecentLoginsQuery,
};

pub const ALLOWED_EMAIL: &str = "alice@example.com";
pub const UNKNOWN_EMAIL: &str = "john.doe_smith@example.com";
pub const CLIENT_IP: &str = "203.0.113.7";

pub fn peer() -> SocketAddr {
    SocketAddr::from(([10, 0, 0, 1], 51000))
}

pub fn decide_command(email: &str) -> DecideAccessCommand {
    DecideAccessCommand::new(email.to_string(), Some(CLIENT_IP.to_string()))
        .expect("valid decide command")
}

pub fn manual_notification_command(email: &str) -> RequestManualNotificationCommand {
    RequestManualNotificationCommand::new(email.to_string())
        .expect("valid manual notification command")
}

pub fn recent_logins_query(email: &str) -> RecentLoginsQuery {
    RecentLoginsQuery::new(email.to_string()).expect("valid recent logins query")
}
