use std::sync::Arc;

use reqwest::Client;

use crate::{
    config::app_config::AppConfig,
    notifications::{
        application::acl::pubsub_notification_publisher_impl::{
            PubSubNotificationPublisherImpl, PubSubTopic,
        },
        infrastructure::gcp::{
            access_token_provider::AccessTokenProvider,
            metadata_server_access_token_provider_impl::MetadataServerAccessTokenProviderImpl,
            static_access_token_provider_impl::StaticAccessTokenProviderImpl,
        },
        interfaces::acl::notification_publisher::NotificationPublisher,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_notification_publisher(config: &AppConfig) -> Arc<dyn NotificationPublisher> {
    let client = Client::new();

    let token_provider: Arc<dyn AccessTokenProvider> =
        match (&config.pubsub_emulator_host, &config.gcp_access_token) {
            (Some(_), _) => Arc::new(StaticAccessTokenProviderImpl::anonymous()),
            (None, Some(token)) => Arc::new(StaticAccessTokenProviderImpl::new(Some(token.clone()))),
            (None, None) => Arc::new(MetadataServerAccessTokenProviderImpl::new(client.clone())),
        };

    Arc::new(PubSubNotificationPublisherImpl::new(
        client,
        PubSubTopic {
            base_url: config.pubsub_base_url(),
            project_id: config.gcp_project_id.clone(),
            topic: config.pubsub_topic.clone(),
        },
        token_provider,
        config.pubsub_publish_timeout,
    ))
}
