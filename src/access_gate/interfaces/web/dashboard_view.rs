use minijinja::{Environment, context};
use serde::Serialize;

use crate::access_gate::{
    domain::model::entities::login_event::LoginEvent,
    interfaces::web::template_environment::DASHBOARD_TEMPLATE,
};

#[derive(Serialize)]
struct LoginRow {
    timestamp: String,
    ip_address: String,
}

impl From<&LoginEvent> for LoginRow {
    fn from(event: &LoginEvent) -> Self {
        Self {
            timestamp: event.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ip_address: event.ip_address.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn render_dashboard(
    environment: &Environment<'_>,
    user_email: &str,
    logs: &[LoginEvent],
) -> Result<String, minijinja::Error> {
    let rows: Vec<LoginRow> = logs.iter().map(LoginRow::from).collect();

    environment
        .get_template(DASHBOARD_TEMPLATE)?
        .render(context! { email => user_email, logs => rows })
}
