/// Recording mail transport for integration testing
use async_trait::async_trait;
use contactflow_core::models::{EmailMessage, SendReceipt};
use contactflow_core::services::{MailTransport, TransportError};
use std::sync::{Arc, Mutex};

/// Fake relay that records sent messages and fails on demand
#[derive(Clone, Default)]
pub struct FakeTransport {
    pub sent: Arc<Mutex<Vec<EmailMessage>>>,
    pub verify_calls: Arc<Mutex<usize>>,
    verify_error: Option<String>,
    send_error: Option<String>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relay whose connection check fails with the given message
    pub fn unreachable(message: &str) -> Self {
        Self {
            verify_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Relay that refuses every message with the given message
    pub fn rejecting(message: &str) -> Self {
        Self {
            send_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_attempts(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn verify_count(&self) -> usize {
        *self.verify_calls.lock().unwrap()
    }
}

#[async_trait]
impl MailTransport for FakeTransport {
    async fn verify_connection(&self) -> Result<(), TransportError> {
        *self.verify_calls.lock().unwrap() += 1;
        match &self.verify_error {
            Some(message) => Err(TransportError::with_code("421", message.clone())),
            None => Ok(()),
        }
    }

    async fn send_message(&self, email: &EmailMessage) -> Result<SendReceipt, TransportError> {
        self.sent.lock().unwrap().push(email.clone());
        match &self.send_error {
            Some(message) => Err(TransportError::new(message.clone())),
            None => Ok(SendReceipt {
                code: Some("250".to_string()),
                response: Some("2.0.0 OK queued".to_string()),
            }),
        }
    }
}
