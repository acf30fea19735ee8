use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::notifications::{
    domain::model::{
        enums::{activity_type::ActivityType, notification_error::NotificationError},
        events::user_activity_notification_event::UserActivityNotificationEvent,
    },
    infrastructure::gcp::access_token_provider::AccessTokenProvider,
    interfaces::acl::notification_publisher::NotificationPublisher,
};

#[derive(Debug, Serialize)]
struct PublishRequest {
    messages: Vec<PubsubMessage>,
}

#[derive(Debug, Serialize)]
struct PubsubMessage {
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublishResponse {
    #[serde(default)]
    message_ids: Vec<String>,
}

pub struct PubSubTopic {
    pub base_url: String,
    pub project_id: String,
    pub topic: String,
}

/// Publishes activity envelopes through the Pub/Sub REST API.
pub struct PubSubNotificationPublisherImpl {
    client: Client,
    topic: PubSubTopic,
    token_provider: Arc<dyn AccessTokenProvider>,
    timeout: Duration,
}

impl PubSubNotificationPublisherImpl {
    pub fn new(
        client: Client,
        topic: PubSubTopic,
        token_provider: Arc<dyn AccessTokenProvider>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            topic,
            token_provider,
            timeout,
        }
    }

    /// `{base}/v1/projects/{project}/topics/{topic}:publish`, with project and
    /// topic percent-encoded as single path segments.
    fn publish_url(&self) -> Result<Url, NotificationError> {
        let mut url = Url::parse(&self.topic.base_url)
            .map_err(|e| NotificationError::InvalidEndpoint(e.to_string()))?;
        let action = format!("{}:publish", self.topic.topic);

        url.path_segments_mut()
            .map_err(|_| NotificationError::InvalidEndpoint(self.topic.base_url.clone()))?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                self.topic.project_id.as_str(),
                "topics",
                action.as_str(),
            ]);

        Ok(url)
    }

    async fn publish_event(
        &self,
        event: &UserActivityNotificationEvent,
    ) -> Result<String, NotificationError> {
        let payload =
            serde_json::to_vec(event).map_err(|e| NotificationError::Serialization(e.to_string()))?;
        let body = PublishRequest {
            messages: vec![PubsubMessage {
                data: STANDARD.encode(payload),
            }],
        };

        let mut request = self.client.post(self.publish_url()?).json(&body);
        if let Some(token) = self.token_provider.access_token().await? {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response
            .json::<PublishResponse>()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        parsed
            .message_ids
            .into_iter()
            .next()
            .ok_or_else(|| NotificationError::Rejected {
                status: status.as_u16(),
                body: "response carried no message id".to_string(),
            })
    }
}

#[async_trait]
impl NotificationPublisher for PubSubNotificationPublisherImpl {
    async fn publish(&self, user_email: &str, activity_type: ActivityType) -> bool {
        let event = UserActivityNotificationEvent::new(user_email, activity_type, Utc::now());

        let outcome = tokio::time::timeout(self.timeout, self.publish_event(&event))
            .await
            .map_err(|_| NotificationError::Timeout(self.timeout))
            .and_then(|result| result);

        match outcome {
            Ok(message_id) => {
                tracing::info!(
                    message_id = %message_id,
                    activity = %activity_type,
                    topic = %self.topic.topic,
                    "published notification"
                );
                true
            }
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    activity = %activity_type,
                    topic = %self.topic.topic,
                    "failed to publish notification"
                );
                false
            }
        }
    }
}
