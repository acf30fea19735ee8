use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::notifications::{
    domain::model::enums::notification_error::NotificationError,
    infrastructure::gcp::access_token_provider::AccessTokenProvider,
};

const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Tokens are refreshed this long before the server-reported expiry.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct MetadataTokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    refresh_at: Instant,
}

/// Service-account tokens from the GCE / Cloud Run metadata server.
pub struct MetadataServerAccessTokenProviderImpl {
    client: Client,
    token_url: String,
    cache: RwLock<Option<CachedToken>>,
}

impl MetadataServerAccessTokenProviderImpl {
    pub fn new(client: Client) -> Self {
        Self::new_with_token_url(client, METADATA_TOKEN_URL.to_string())
    }

    pub fn new_with_token_url(client: Client, token_url: String) -> Self {
        Self {
            client,
            token_url,
            cache: RwLock::new(None),
        }
    }

    async fn get_cached(&self) -> Option<String> {
        let guard = self.cache.read().await;
        guard
            .as_ref()
            .filter(|cached| cached.refresh_at > Instant::now())
            .map(|cached| cached.token.clone())
    }

    async fn fetch_token(&self) -> Result<MetadataTokenResponse, NotificationError> {
        let response = self
            .client
            .get(&self.token_url)
            .header("Metadata-Flavor", "Google")
            .send()
            .await
            .map_err(|e| NotificationError::Credentials(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotificationError::Credentials(format!(
                "metadata server answered {status}"
            )));
        }

        response
            .json::<MetadataTokenResponse>()
            .await
            .map_err(|e| NotificationError::Credentials(e.to_string()))
    }
}

#[async_trait]
impl AccessTokenProvider for MetadataServerAccessTokenProviderImpl {
    async fn access_token(&self) -> Result<Option<String>, NotificationError> {
        if let Some(token) = self.get_cached().await {
            return Ok(Some(token));
        }

        let fetched = self.fetch_token().await?;
        let lifetime = Duration::from_secs(fetched.expires_in).saturating_sub(EXPIRY_MARGIN);

        let mut guard = self.cache.write().await;
        *guard = Some(CachedToken {
            token: fetched.access_token.clone(),
            refresh_at: Instant::now() + lifetime,
        });
        tracing::debug!(expires_in = fetched.expires_in, "refreshed metadata access token");

        Ok(Some(fetched.access_token))
    }
}
