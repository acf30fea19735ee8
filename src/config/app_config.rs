use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
    pub db_run_migrations: bool,
    pub gcp_project_id: String,
    pub pubsub_topic: String,
    pub pubsub_emulator_host: Option<String>,
    pub gcp_access_token: Option<String>,
    pub pubsub_publish_timeout: Duration,
    pub identity_fallback_email: String,
    pub log_json: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            db_host: std::env::var("DB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            db_port: std::env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            db_user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            db_password: std::env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "access_gate".to_string()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(5),
            db_run_migrations: std::env::var("DB_RUN_MIGRATIONS")
                .map(|raw| !matches!(raw.trim(), "false" | "0" | "no"))
                .unwrap_or(true),
            gcp_project_id: std::env::var("GCP_PROJECT_ID")
                .unwrap_or_else(|_| "local-project".to_string()),
            pubsub_topic: std::env::var("PUBSUB_TOPIC")
                .unwrap_or_else(|_| "user-notifications".to_string()),
            pubsub_emulator_host: non_empty_var("PUBSUB_EMULATOR_HOST"),
            gcp_access_token: non_empty_var("GCP_ACCESS_TOKEN"),
            pubsub_publish_timeout: Duration::from_secs(
                std::env::var("PUBSUB_PUBLISH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or(10),
            ),
            identity_fallback_email: std::env::var("IDENTITY_FALLBACK_EMAIL")
                .unwrap_or_else(|_| "test-user@example.com".to_string()),
            log_json: std::env::var("LOG_FORMAT")
                .map(|raw| raw.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    pub fn database_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }

    pub fn pubsub_base_url(&self) -> String {
        match &self.pubsub_emulator_host {
            Some(host) => format!("http://{host}"),
            None => "https://pubsub.googleapis.com".to_string(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}
