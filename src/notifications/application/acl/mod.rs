pub mod pubsub_notification_publisher_impl;
