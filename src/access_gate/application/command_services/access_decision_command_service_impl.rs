use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    access_gate::{
        domain::{
            model::{
                commands::{
                    decide_access_command::DecideAccessCommand,
                    request_manual_notification_command::RequestManualNotificationCommand,
                },
                enums::access_gate_domain_error::AccessGateDomainError,
                events::{
                    login_succeeded_event::LoginSucceededEvent,
                    unauthorized_access_attempted_event::{
                        NOT_IN_ALLOW_LIST_REASON, UnauthorizedAccessAttemptedEvent,
                    },
                },
                queries::recent_logins_query::RECENT_LOGINS_LIMIT,
                value_objects::{display_name::DisplayName, user_email::UserEmail},
            },
            services::access_decision_command_service::{
                AccessDecision, AccessDecisionCommandService,
            },
        },
        infrastructure::persistence::repositories::{
            authorized_user_repository::AuthorizedUserRepository,
            login_event_repository::LoginEventRepository,
            unauthorized_access_event_repository::UnauthorizedAccessEventRepository,
        },
    },
    notifications::{
        domain::model::enums::activity_type::ActivityType,
        interfaces::acl::notification_publisher::NotificationPublisher,
    },
};

pub struct AccessDecisionCommandServiceImpl {
    authorized_user_repository: Arc<dyn AuthorizedUserRepository>,
    login_event_repository: Arc<dyn LoginEventRepository>,
    unauthorized_access_event_repository: Arc<dyn UnauthorizedAccessEventRepository>,
    notification_publisher: Arc<dyn NotificationPublisher>,
}

impl AccessDecisionCommandServiceImpl {
    pub fn new(
        authorized_user_repository: Arc<dyn AuthorizedUserRepository>,
        login_event_repository: Arc<dyn LoginEventRepository>,
        unauthorized_access_event_repository: Arc<dyn UnauthorizedAccessEventRepository>,
        notification_publisher: Arc<dyn NotificationPublisher>,
    ) -> Self {
        Self {
            authorized_user_repository,
            login_event_repository,
            unauthorized_access_event_repository,
            notification_publisher,
        }
    }

    async fn is_allow_listed(&self, email: &UserEmail) -> Result<bool, AccessGateDomainError> {
        Ok(self
            .authorized_user_repository
            .find_by_email(email)
            .await?
            .is_some())
    }

    async fn notify(&self, email: &UserEmail, activity_type: ActivityType) -> bool {
        let delivered = self
            .notification_publisher
            .publish(email.value(), activity_type)
            .await;
        if !delivered {
            tracing::debug!(
                email = %email.value(),
                activity = %activity_type,
                "notification not delivered, continuing"
            );
        }
        delivered
    }

    async fn record_login(
        &self,
        command: &DecideAccessCommand,
    ) -> Result<AccessDecision, AccessGateDomainError> {
        let email = command.email();

        let id = self
            .login_event_repository
            .append(&LoginSucceededEvent {
                email: email.value().to_string(),
                ip_address: command.ip_address().map(str::to_string),
                occurred_at: Utc::now(),
            })
            .await?;
        tracing::info!(
            login_id = id,
            email = %email.value(),
            ip = command.ip_address().unwrap_or("-"),
            "login recorded"
        );

        self.notify(email, ActivityType::SuccessfulLogin).await;

        let recent_logins = self
            .login_event_repository
            .find_recent_by_email(email, RECENT_LOGINS_LIMIT)
            .await?;

        Ok(AccessDecision::Authorized {
            email: email.value().to_string(),
            recent_logins,
        })
    }

    async fn record_unauthorized(
        &self,
        command: &DecideAccessCommand,
    ) -> Result<AccessDecision, AccessGateDomainError> {
        let email = command.email();

        let id = self
            .unauthorized_access_event_repository
            .append(&UnauthorizedAccessAttemptedEvent {
                email: email.value().to_string(),
                reason: NOT_IN_ALLOW_LIST_REASON.to_string(),
                ip_address: command.ip_address().map(str::to_string),
                occurred_at: Utc::now(),
            })
            .await?;
        tracing::warn!(
            attempt_id = id,
            email = %email.value(),
            ip = command.ip_address().unwrap_or("-"),
            "unauthorized access attempt recorded"
        );

        self.notify(email, ActivityType::UnauthorizedAccessAttempt)
            .await;

        Ok(AccessDecision::Unauthorized {
            email: email.value().to_string(),
            display_name: DisplayName::from_email(email).into_inner(),
        })
    }
}

#[async_trait]
impl AccessDecisionCommandService for AccessDecisionCommandServiceImpl {
    async fn handle_decide_access(
        &self,
        command: DecideAccessCommand,
    ) -> Result<AccessDecision, AccessGateDomainError> {
        if self.is_allow_listed(command.email()).await? {
            self.record_login(&command).await
        } else {
            self.record_unauthorized(&command).await
        }
    }

    async fn handle_request_manual_notification(
        &self,
        command: RequestManualNotificationCommand,
    ) -> Result<bool, AccessGateDomainError> {
        if !self.is_allow_listed(command.email()).await? {
            return Err(AccessGateDomainError::Unauthorized);
        }

        Ok(self
            .notify(command.email(), ActivityType::ManualNotificationRequest)
            .await)
    }
}
