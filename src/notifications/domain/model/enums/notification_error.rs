use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("invalid publish endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("failed to serialize notification: {0}")]
    Serialization(String),

    #[error("failed to obtain access token: {0}")]
    Credentials(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("publish rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("publish not acknowledged within {0:?}")]
    Timeout(Duration),
}
