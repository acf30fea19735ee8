use std::net::SocketAddr;

use axum::Router;
use dotenvy::dotenv;
use iap_access_gate::{
    access_gate::{
        build_access_gate_router,
        interfaces::rest::resources::{
            access_gate_error_response_resource::AccessGateErrorResponseResource,
            health_response_resource::HealthResponseResource,
            login_form_resource::LoginFormResource,
            login_logs_response_resource::{LoginLogResource, LoginLogsResponseResource},
            notification_response_resource::NotificationResponseResource,
        },
    },
    config::app_config::AppConfig,
    notifications::build_notification_publisher,
    shared::observability,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        iap_access_gate::access_gate::interfaces::rest::controllers::access_gate_rest_controller::show_login_form,
        iap_access_gate::access_gate::interfaces::rest::controllers::access_gate_rest_controller::login,
        iap_access_gate::access_gate::interfaces::rest::controllers::access_gate_rest_controller::list_recent_logs,
        iap_access_gate::access_gate::interfaces::rest::controllers::access_gate_rest_controller::request_notification,
        iap_access_gate::access_gate::interfaces::rest::controllers::access_gate_rest_controller::health_check
    ),
    components(
        schemas(
            AccessGateErrorResponseResource,
            HealthResponseResource,
            LoginFormResource,
            LoginLogResource,
            LoginLogsResponseResource,
            NotificationResponseResource
        )
    ),
    tags(
        (name = "access-gate", description = "Identity-gated login, audit log and notifications")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let config = AppConfig::from_env();
    observability::init(config.log_json);

    let notification_publisher = build_notification_publisher(&config);
    let access_gate_router = build_access_gate_router(&config, notification_publisher).await?;

    let app = Router::new()
        .merge(access_gate_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        port = config.port,
        project = %config.gcp_project_id,
        topic = %config.pubsub_topic,
        "access gate listening on http://localhost:{}",
        config.port
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
