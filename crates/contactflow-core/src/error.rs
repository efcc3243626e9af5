/// Error types for Contactflow system
use crate::services::transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactflowError {
    #[error("Spam not allowed!")]
    SpamRejected,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Server is not ready to accept messages")]
    TransportVerifyFailed(#[source] TransportError),

    #[error("{0}")]
    TransportSendFailed(#[source] TransportError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ContactflowError {
    /// HTTP status the error maps to at the handler boundary
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Config(_) => 500,
            _ => 400,
        }
    }

    /// Stable name used in log records
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SpamRejected => "SpamRejected",
            Self::MissingField(_) => "MissingField",
            Self::MalformedBody(_) => "MalformedBody",
            Self::TransportVerifyFailed(_) => "TransportVerifyFailed",
            Self::TransportSendFailed(_) => "TransportSendFailed",
            Self::Config(_) => "Config",
        }
    }

    /// Relay reply code, when the error came from the mail transport
    pub fn transport_code(&self) -> Option<&str> {
        match self {
            Self::TransportVerifyFailed(e) | Self::TransportSendFailed(e) => e.code(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ContactflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedBody(err.to_string())
    }
}
