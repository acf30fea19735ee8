pub mod sqlx_authorized_user_repository_impl;
pub mod sqlx_database_health_repository_impl;
pub mod sqlx_login_event_repository_impl;
pub mod sqlx_unauthorized_access_event_repository_impl;
