use std::{sync::Arc, time::Duration};

use axum::Router;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    access_gate::{
        application::{
            command_services::access_decision_command_service_impl::AccessDecisionCommandServiceImpl,
            query_services::access_decision_query_service_impl::AccessDecisionQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_authorized_user_repository_impl::SqlxAuthorizedUserRepositoryImpl,
            sqlx_database_health_repository_impl::SqlxDatabaseHealthRepositoryImpl,
            sqlx_login_event_repository_impl::SqlxLoginEventRepositoryImpl,
            sqlx_unauthorized_access_event_repository_impl::SqlxUnauthorizedAccessEventRepositoryImpl,
        },
        interfaces::{
            rest::controllers::access_gate_rest_controller::{AccessGateRestControllerState, router},
            web::template_environment::build_template_environment,
        },
    },
    config::app_config::AppConfig,
    iap_integration::application::acl::iap_header_identity_extractor_impl::IapHeaderIdentityExtractorImpl,
    notifications::interfaces::acl::notification_publisher::NotificationPublisher,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Connections older than this are recycled before reuse.
const POOL_MAX_LIFETIME: Duration = Duration::from_secs(280);

pub async fn connect_pool(config: &AppConfig) -> Result<PgPool, String> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .max_lifetime(POOL_MAX_LIFETIME)
        .test_before_acquire(true)
        .connect_with(config.database_connect_options())
        .await
        .map_err(|e| e.to_string())?;

    if config.db_run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| e.to_string())?;
        tracing::info!("database migrations applied");
    }

    Ok(pool)
}

pub async fn build_access_gate_router(
    config: &AppConfig,
    notification_publisher: Arc<dyn NotificationPublisher>,
) -> Result<Router, String> {
    let pool = connect_pool(config).await?;

    let authorized_user_repository = Arc::new(SqlxAuthorizedUserRepositoryImpl::new(pool.clone()));
    let login_event_repository = Arc::new(SqlxLoginEventRepositoryImpl::new(pool.clone()));
    let unauthorized_access_event_repository =
        Arc::new(SqlxUnauthorizedAccessEventRepositoryImpl::new(pool.clone()));
    let database_health_repository = Arc::new(SqlxDatabaseHealthRepositoryImpl::new(pool));

    let command_service = Arc::new(AccessDecisionCommandServiceImpl::new(
        authorized_user_repository.clone(),
        login_event_repository.clone(),
        unauthorized_access_event_repository,
        notification_publisher,
    ));
    let query_service = Arc::new(AccessDecisionQueryServiceImpl::new(
        authorized_user_repository,
        login_event_repository,
        database_health_repository,
    ));
    let identity_extractor = Arc::new(IapHeaderIdentityExtractorImpl::new(
        config.identity_fallback_email.clone(),
    ));
    let templates = Arc::new(build_template_environment().map_err(|e| e.to_string())?);

    Ok(router(AccessGateRestControllerState {
        command_service,
        query_service,
        identity_extractor,
        templates,
    }))
}
