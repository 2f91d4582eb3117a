//! Error type shared by application services.

use zbierka_domain::DomainError;

use crate::ports::outbound::ApiError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Invalid record: {0}")]
    Invalid(#[from] DomainError),
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        Self::ParseError(e.to_string())
    }
}
