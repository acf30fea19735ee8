pub mod user_activity_notification_event;
