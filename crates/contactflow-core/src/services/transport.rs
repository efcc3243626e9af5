/// Mail transport abstraction
use crate::models::{EmailMessage, SendReceipt};
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a mail transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    code: Option<String>,
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// Relay reply code, if the relay answered at all
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<lettre::transport::smtp::Error> for TransportError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self {
            code: err.status().map(|code| code.to_string()),
            message: err.to_string(),
        }
    }
}

/// Connection to an outbound email relay
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Checks that the relay accepts connections and credentials
    async fn verify_connection(&self) -> Result<(), TransportError>;

    /// Sends one message through the relay
    async fn send_message(&self, email: &EmailMessage) -> Result<SendReceipt, TransportError>;
}
