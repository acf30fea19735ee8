use std::{net::SocketAddr, sync::Arc};

use axum::{
    Form, Json, Router,
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    routing::{get, post},
};
use minijinja::Environment;
use validator::Validate;

use crate::{
    access_gate::{
        domain::{
            model::{
                commands::{
                    decide_access_command::DecideAccessCommand,
                    request_manual_notification_command::RequestManualNotificationCommand,
                },
                enums::access_gate_domain_error::AccessGateDomainError,
                queries::recent_logins_query::RecentLoginsQuery,
            },
            services::{
                access_decision_command_service::{AccessDecision, AccessDecisionCommandService},
                access_decision_query_service::AccessDecisionQueryService,
            },
        },
        interfaces::{
            rest::resources::{
                access_gate_error_response_resource::AccessGateErrorResponseResource,
                health_response_resource::HealthResponseResource,
                login_form_resource::LoginFormResource,
                login_logs_response_resource::{LoginLogResource, LoginLogsResponseResource},
                notification_response_resource::NotificationResponseResource,
            },
            web::{
                dashboard_view::render_dashboard, email_form_view::render_email_form,
                unauthorized_view::render_unauthorized,
            },
        },
    },
    iap_integration::{
        domain::model::value_objects::request_identity::RequestIdentity,
        interfaces::acl::identity_extractor::{IdentityExtractor, IdentitySource},
    },
};

type ErrorResponse = (StatusCode, Json<AccessGateErrorResponseResource>);

#[derive(Clone)]
pub struct AccessGateRestControllerState {
    pub command_service: Arc<dyn AccessDecisionCommandService>,
    pub query_service: Arc<dyn AccessDecisionQueryService>,
    pub identity_extractor: Arc<dyn IdentityExtractor>,
    pub templates: Arc<Environment<'static>>,
}

pub fn router(state: AccessGateRestControllerState) -> Router {
    Router::new()
        .route("/", get(show_login_form))
        .route("/login", post(login))
        .route("/api/logs", get(list_recent_logs))
        .route("/api/notify", post(request_notification))
        .route("/health", get(health_check))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "access-gate",
    responses(
        (status = 200, description = "Sign-in form", content_type = "text/html", body = String),
        (status = 500, description = "Template failure", body = AccessGateErrorResponseResource)
    )
)]
pub async fn show_login_form(
    State(state): State<AccessGateRestControllerState>,
) -> Result<Html<String>, ErrorResponse> {
    let page = render_email_form(&state.templates)
        .map_err(|e| map_domain_error(e.into()))?;
    Ok(Html(page))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "access-gate",
    request_body(
        content = LoginFormResource,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Dashboard or access-denied page", content_type = "text/html", body = String),
        (status = 400, description = "Invalid email", body = AccessGateErrorResponseResource),
        (status = 500, description = "Store or rendering failure", body = AccessGateErrorResponseResource)
    )
)]
pub async fn login(
    State(state): State<AccessGateRestControllerState>,
    ConnectInfo(peer_addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    form: Option<Form<LoginFormResource>>,
) -> Result<Html<String>, ErrorResponse> {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    if let Err(validation_error) = form.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AccessGateErrorResponseResource {
                error: validation_error.to_string(),
            }),
        ));
    }

    let (email, ip) = resolve_identity(&state, &headers, form.email.as_deref(), peer_addr)
        .into_parts();
    let command = DecideAccessCommand::new(email, Some(ip)).map_err(map_domain_error)?;

    let decision = state
        .command_service
        .handle_decide_access(command)
        .await
        .map_err(map_domain_error)?;

    let page = match decision {
        AccessDecision::Authorized {
            email,
            recent_logins,
        } => render_dashboard(&state.templates, &email, &recent_logins),
        AccessDecision::Unauthorized {
            email,
            display_name,
        } => render_unauthorized(&state.templates, &email, &display_name),
    }
    .map_err(|e| map_domain_error(e.into()))?;

    Ok(Html(page))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    tag = "access-gate",
    responses(
        (status = 200, description = "Most recent logins of the caller", body = LoginLogsResponseResource),
        (status = 403, description = "Caller not on the allow-list", body = AccessGateErrorResponseResource),
        (status = 500, description = "Store failure", body = AccessGateErrorResponseResource)
    )
)]
pub async fn list_recent_logs(
    State(state): State<AccessGateRestControllerState>,
    ConnectInfo(peer_addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<Json<LoginLogsResponseResource>, ErrorResponse> {
    let identity = resolve_identity(&state, &headers, None, peer_addr);
    let query = RecentLoginsQuery::new(identity.email().to_string()).map_err(map_domain_error)?;

    let logs = state
        .query_service
        .handle_recent_logins(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(LoginLogsResponseResource {
        logs: logs.into_iter().map(LoginLogResource::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/notify",
    tag = "access-gate",
    responses(
        (status = 200, description = "Notification published", body = NotificationResponseResource),
        (status = 403, description = "Caller not on the allow-list", body = AccessGateErrorResponseResource),
        (status = 500, description = "Notification or store failure", body = AccessGateErrorResponseResource)
    )
)]
pub async fn request_notification(
    State(state): State<AccessGateRestControllerState>,
    ConnectInfo(peer_addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    form: Option<Form<LoginFormResource>>,
) -> Result<Json<NotificationResponseResource>, ErrorResponse> {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let identity = resolve_identity(&state, &headers, form.email.as_deref(), peer_addr);
    let command = RequestManualNotificationCommand::new(identity.email().to_string())
        .map_err(map_domain_error)?;

    let delivered = state
        .command_service
        .handle_request_manual_notification(command)
        .await
        .map_err(map_domain_error)?;

    if !delivered {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(AccessGateErrorResponseResource {
                error: "Failed to send notification".to_string(),
            }),
        ));
    }

    Ok(Json(NotificationResponseResource {
        message: "Notification sent successfully".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "access-gate",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponseResource),
        (status = 500, description = "Store unreachable", body = HealthResponseResource)
    )
)]
pub async fn health_check(
    State(state): State<AccessGateRestControllerState>,
) -> (StatusCode, Json<HealthResponseResource>) {
    match state.query_service.handle_health_check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponseResource::healthy())),
        Err(error) => {
            tracing::error!(error = %error, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponseResource::unhealthy(error.to_string())),
            )
        }
    }
}

fn resolve_identity(
    state: &AccessGateRestControllerState,
    headers: &HeaderMap,
    form_email: Option<&str>,
    peer_addr: SocketAddr,
) -> RequestIdentity {
    state.identity_extractor.extract(IdentitySource {
        headers,
        form_email,
        peer_addr,
    })
}

fn map_domain_error(error: AccessGateDomainError) -> ErrorResponse {
    let status = match error {
        AccessGateDomainError::InvalidEmail => StatusCode::BAD_REQUEST,
        AccessGateDomainError::Unauthorized => StatusCode::FORBIDDEN,
        AccessGateDomainError::InfrastructureError(_) => {
            tracing::error!(error = %error, "request failed on store access");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        AccessGateDomainError::TemplateError(_) => {
            tracing::error!(error = %error, "page rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(AccessGateErrorResponseResource {
            error: error.to_string(),
        }),
    )
}
