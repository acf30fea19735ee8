use std::sync::Arc;

use iap_access_gate::{
    access_gate::{
        application::{
            command_services::access_decision_command_service_impl::AccessDecisionCommandServiceImpl,
            query_services::access_decision_query_service_impl::AccessDecisionQueryServiceImpl,
        },
        interfaces::{
            rest::controllers::access_gate_rest_controller::AccessGateRestControllerState,
            web::template_environment::build_template_environment,
        },
    },
    iap_integration::application::acl::iap_header_identity_extractor_impl::IapHeaderIdentityExtractorImpl,
};

use super::fakes::{
    FakeAuthorizedUserRepository, FakeDatabaseHealthRepository, FakeLoginEventRepository,
    FakeNotificationPublisher, FakeUnauthorizedAccessEventRepository,
};

pub const FALLBACK_EMAIL: &str = "fallback@example.com";

pub struct AccessGateHarness {
    pub authorized_user_repository: Arc<FakeAuthorizedUserRepository>,
    pub login_event_repository: Arc<FakeLoginEventRepository>,
    pub unauthorized_access_event_repository: Arc<FakeUnauthorizedAccessEventRepository>,
    pub database_health_repository: Arc<FakeDatabaseHealthRepository>,
    pub notification_publisher: Arc<FakeNotificationPublisher>,
    pub command_service: Arc<AccessDecisionCommandServiceImpl>,
    pub query_service: Arc<AccessDecisionQueryServiceImpl>,
}

impl AccessGateHarness {
    pub fn state(&self) -> AccessGateRestControllerState {
        AccessGateRestControllerState {
            command_service: self.command_service.clone(),
            query_service: self.query_service.clone(),
            identity_extractor: Arc::new(IapHeaderIdentityExtractorImpl::new(
                FALLBACK_EMAIL.to_string(),
            )),
            templates: Arc::new(build_template_environment().expect("templates compile")),
        }
    }
}

pub fn create_harness() -> AccessGateHarness {
    let authorized_user_repository = Arc::new(FakeAuthorizedUserRepository::new());
    let login_event_repository = Arc::new(FakeLoginEventRepository::new());
    let unauthorized_access_event_repository =
        Arc::new(FakeUnauthorizedAccessEventRepository::new());
    let database_health_repository = Arc::new(FakeDatabaseHealthRepository::new());
    let notification_publisher = Arc::new(FakeNotificationPublisher::new());

    let command_service = Arc::new(AccessDecisionCommandServiceImpl::new(
        authorized_user_repository.clone(),
        login_event_repository.clone(),
        unauthorized_access_event_repository.clone(),
        notification_publisher.clone(),
    ));
    let query_service = Arc::new(AccessDecisionQueryServiceImpl::new(
        authorized_user_repository.clone(),
        login_event_repository.clone(),
        database_health_repository.clone(),
    ));

    AccessGateHarness {
        authorized_user_repository,
        login_event_repository,
        unauthorized_access_event_repository,
        database_health_repository,
        notification_publisher,
        command_service,
        query_service,
    }
}
