use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use iap_access_gate::{
    access_gate::{
        domain::model::{
            entities::{authorized_user::AuthorizedUser, login_event::LoginEvent},
            enums::access_gate_domain_error::AccessGateDomainError,
            events::{
                login_succeeded_event::LoginSucceededEvent,
                unauthorized_access_attempted_event::UnauthorizedAccessAttemptedEvent,
            },
            value_objects::user_email::UserEmail,
        },
        infrastructure::persistence::repositories::{
            authorized_user_repository::AuthorizedUserRepository,
            database_health_repository::DatabaseHealthRepository,
            login_event_repository::LoginEventRepository,
            unauthorized_access_event_repository::UnauthorizedAccessEventRepository,
        },
    },
    notifications::{
        domain::model::enums::activity_type::ActivityType,
        interfaces::acl::notification_publisher::NotificationPublisher,
    },
};

#[derive(Default)]
struct FakeAuthorizedUserState {
    emails: Vec<String>,
    find_calls: usize,
    failure: Option<String>,
}

pub struct FakeAuthorizedUserRepository {
    state: Mutex<FakeAuthorizedUserState>,
}

impl FakeAuthorizedUserRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeAuthorizedUserState::default()),
        }
    }

    pub fn allow(&self, email: &str) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .emails
            .push(email.to_string());
    }

    pub fn fail_with(&self, message: &str) {
        self.state.lock().expect("mutex poisoned").failure = Some(message.to_string());
    }

    pub fn find_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").find_calls
    }
}

#[async_trait]
impl AuthorizedUserRepository for FakeAuthorizedUserRepository {
    async fn find_by_email(
        &self,
        email: &UserEmail,
    ) -> Result<Option<AuthorizedUser>, AccessGateDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.find_calls += 1;
        if let Some(message) = &state.failure {
            return Err(AccessGateDomainError::InfrastructureError(message.clone()));
        }

        Ok(state
            .emails
            .iter()
            .position(|allowed| allowed == email.value())
            .map(|index| AuthorizedUser {
                id: index as i64 + 1,
                email: email.value().to_string(),
                created_at: Utc::now(),
            }))
    }
}

pub struct FakeLoginEventRepository {
    events: Mutex<Vec<LoginEvent>>,
}

impl FakeLoginEventRepository {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<LoginEvent> {
        self.events.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl LoginEventRepository for FakeLoginEventRepository {
    async fn append(&self, event: &LoginSucceededEvent) -> Result<i64, AccessGateDomainError> {
        let mut events = self.events.lock().expect("mutex poisoned");
        let id = events.len() as i64 + 1;
        events.push(LoginEvent {
            id,
            email: event.email.clone(),
            timestamp: event.occurred_at,
            ip_address: event.ip_address.clone(),
        });
        Ok(id)
    }

    async fn find_recent_by_email(
        &self,
        email: &UserEmail,
        limit: i64,
    ) -> Result<Vec<LoginEvent>, AccessGateDomainError> {
        let mut matching = self
            .events
            .lock()
            .expect("mutex poisoned")
            .iter()
            .filter(|event| event.email == email.value())
            .cloned()
            .collect::<Vec<_>>();
        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        matching.truncate(limit as usize);
        Ok(matching)
    }
}

pub struct FakeUnauthorizedAccessEventRepository {
    events: Mutex<Vec<UnauthorizedAccessAttemptedEvent>>,
}

impl FakeUnauthorizedAccessEventRepository {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<UnauthorizedAccessAttemptedEvent> {
        self.events.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl UnauthorizedAccessEventRepository for FakeUnauthorizedAccessEventRepository {
    async fn append(
        &self,
        event: &UnauthorizedAccessAttemptedEvent,
    ) -> Result<i64, AccessGateDomainError> {
        let mut events = self.events.lock().expect("mutex poisoned");
        events.push(event.clone());
        Ok(events.len() as i64)
    }
}

pub struct FakeDatabaseHealthRepository {
    failure: Mutex<Option<String>>,
}

impl FakeDatabaseHealthRepository {
    pub fn new() -> Self {
        Self {
            failure: Mutex::new(None),
        }
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().expect("mutex poisoned") = Some(message.to_string());
    }
}

#[async_trait]
impl DatabaseHealthRepository for FakeDatabaseHealthRepository {
    async fn ping(&self) -> Result<(), AccessGateDomainError> {
        match self.failure.lock().expect("mutex poisoned").clone() {
            Some(message) => Err(AccessGateDomainError::InfrastructureError(message)),
            None => Ok(()),
        }
    }
}

pub struct FakeNotificationPublisher {
    deliver: Mutex<bool>,
    calls: Mutex<Vec<(String, ActivityType)>>,
}

impl FakeNotificationPublisher {
    pub fn new() -> Self {
        Self {
            deliver: Mutex::new(true),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_deliver(&self, deliver: bool) {
        *self.deliver.lock().expect("mutex poisoned") = deliver;
    }

    pub fn calls(&self) -> Vec<(String, ActivityType)> {
        self.calls.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl NotificationPublisher for FakeNotificationPublisher {
    async fn publish(&self, user_email: &str, activity_type: ActivityType) -> bool {
        self.calls
            .lock()
            .expect("mutex poisoned")
            .push((user_email.to_string(), activity_type));
        *self.deliver.lock().expect("mutex poisoned")
    }
}
