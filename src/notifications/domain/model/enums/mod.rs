pub mod activity_type;
pub mod notification_error;
