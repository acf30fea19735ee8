pub mod notification_publisher;
