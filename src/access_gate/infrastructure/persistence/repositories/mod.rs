pub mod authorized_user_repository;
pub mod database_health_repository;
pub mod login_event_repository;
pub mod postgres;
pub mod unauthorized_access_event_repository;
