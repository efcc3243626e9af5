/// API Context - shared state for all API handlers
use contactflow_core::ContactflowError;
use contactflow_core::email::EmailComposer;
use contactflow_core::models::ContactflowConfig;
use contactflow_core::services::{MailTransport, SmtpMailTransport};
use std::sync::Arc;

/// API Context contains the read-only resources shared by every request
#[derive(Clone)]
pub struct ApiContext {
    /// Configuration loaded at startup
    pub config: ContactflowConfig,

    /// Mail relay client
    pub transport: Arc<dyn MailTransport>,

    /// Composer bound to the configured envelope
    pub composer: EmailComposer,
}

impl ApiContext {
    /// Create a new API context backed by the configured SMTP relay
    pub fn new(config: ContactflowConfig) -> Result<Arc<Self>, ContactflowError> {
        let transport = Arc::new(SmtpMailTransport::new(&config.transport)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a context around an existing transport
    pub fn with_transport(
        config: ContactflowConfig,
        transport: Arc<dyn MailTransport>,
    ) -> Arc<Self> {
        let composer = EmailComposer::new(config.envelope.clone());
        Arc::new(Self {
            config,
            transport,
            composer,
        })
    }
}
