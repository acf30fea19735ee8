use async_trait::async_trait;

use crate::access_gate::domain::model::{
    commands::{
        decide_access_command::DecideAccessCommand,
        request_manual_notification_command::RequestManualNotificationCommand,
    },
    entities::login_event::LoginEvent,
    enums::access_gate_domain_error::AccessGateDomainError,
};

/// Terminal outcome of a gate check.
#[derive(Clone, Debug)]
pub enum AccessDecision {
    Authorized {
        email: String,
        recent_logins: Vec<LoginEvent>,
    },
    Unauthorized {
        email: String,
        display_name: String,
    },
}

impl AccessDecision {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized { .. })
    }
}

#[async_trait]
pub trait AccessDecisionCommandService: Send + Sync {
    /// Looks the caller up in the allow-list and records the outcome. Every
    /// call appends exactly one audit row.
    async fn handle_decide_access(
        &self,
        command: DecideAccessCommand,
    ) -> Result<AccessDecision, AccessGateDomainError>;

    /// Returns whether the notification was delivered. Fails with
    /// `Unauthorized` when the caller is not on the allow-list.
    async fn handle_request_manual_notification(
        &self,
        command: RequestManualNotificationCommand,
    ) -> Result<bool, AccessGateDomainError>;
}
