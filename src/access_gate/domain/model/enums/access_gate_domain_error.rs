use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessGateDomainError {
    #[error("email is invalid")]
    InvalidEmail,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),

    #[error("template error: {0}")]
    TemplateError(String),
}

impl From<minijinja::Error> for AccessGateDomainError {
    fn from(e: minijinja::Error) -> Self {
        AccessGateDomainError::TemplateError(e.to_string())
    }
}
