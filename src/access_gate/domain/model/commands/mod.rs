pub mod decide_access_command;
pub mod request_manual_notification_command;
