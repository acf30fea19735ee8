use iap_access_gate::access_gate::domain::{
    model::enums::access_gate_domain_error::AccessGateDomainError,
    services::{
        access_decision_command_service::AccessDecisionCommandService,
        access_decision_query_service::AccessDecisionQueryService,
    },
};

use crate::support::{
    ALLOWED_EMAIL, UNKNOWN_EMAIL, create_harness, decide_command, recent_logins_query,
};

#[tokio::test]
async fn recent_logins_rejects_unlisted_caller() {
    let harness = create_harness();

    let result = harness
        .query_service
        .handle_recent_logins(recent_logins_query(UNKNOWN_EMAIL))
        .await;

    assert!(matches!(result, Err(AccessGateDomainError::Unauthorized)));
    assert!(harness.unauthorized_access_event_repository.events().is_empty());
}

#[tokio::test]
async fn recent_logins_returns_at_most_ten_sorted_descending() {
    let harness = create_harness();
    harness.authorized_user_repository.allow(ALLOWED_EMAIL);
    for _ in 0..15 {
        harness
            .command_service
            .handle_decide_access(decide_command(ALLOWED_EMAIL))
            .await
            .expect("decision expected");
    }

    let logins = harness
        .query_service
        .handle_recent_logins(recent_logins_query(ALLOWED_EMAIL))
        .await
        .expect("logins expected");

    assert_eq!(logins.len(), 10);
    assert!(
        logins
            .windows(2)
            .all(|pair| pair[0].timestamp >= pair[1].timestamp)
    );
    assert!(logins.iter().all(|login| login.email == ALLOWED_EMAIL));
}

#[tokio::test]
async fn recent_logins_is_read_only() {
    let harness = create_harness();
    harness.authorized_user_repository.allow(ALLOWED_EMAIL);

    let logins = harness
        .query_service
        .handle_recent_logins(recent_logins_query(ALLOWED_EMAIL))
        .await
        .expect("logins expected");

    assert!(logins.is_empty());
    assert!(harness.login_event_repository.events().is_empty());
    assert!(harness.notification_publisher.calls().is_empty());
    assert_eq!(harness.authorized_user_repository.find_calls(), 1);
}

#[tokio::test]
async fn health_check_reflects_store_state() {
    let harness = create_harness();
    assert!(harness.query_service.handle_health_check().await.is_ok());

    harness.database_health_repository.fail_with("timeout");
    let result = harness.query_service.handle_health_check().await;

    assert!(matches!(
        result,
        Err(AccessGateDomainError::InfrastructureError(message)) if message == "timeout"
    ));
}
