/// SMTP mail transport
use crate::constants::{DEFAULT_SMTP_PORT, IMPLICIT_TLS_PORT};
use crate::email::composer::to_mime_message;
use crate::error::ContactflowError;
use crate::models::{EmailMessage, SendReceipt, TransportAuth, TransportConfig};
use crate::services::transport::{MailTransport, TransportError};
use async_trait::async_trait;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

/// Relay endpoint resolved from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayEndpoint {
    pub host: String,
    pub port: u16,
}

impl RelayEndpoint {
    /// Resolves host and port from an explicit host or a well-known service name
    pub fn resolve(config: &TransportConfig) -> Result<Self, ContactflowError> {
        if let Some(host) = config.host.as_deref().filter(|h| !h.trim().is_empty()) {
            return Ok(Self {
                host: host.trim().to_string(),
                port: config.port.unwrap_or(DEFAULT_SMTP_PORT),
            });
        }

        let service = config
            .service
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ContactflowError::Config("No transport service or host".to_string()))?;

        if let Some((host, port)) = well_known_service(service) {
            return Ok(Self {
                host: host.to_string(),
                port: config.port.unwrap_or(port),
            });
        }

        if service.contains('.') {
            return Ok(Self {
                host: service.to_string(),
                port: config.port.unwrap_or(DEFAULT_SMTP_PORT),
            });
        }

        Err(ContactflowError::Config(format!(
            "Unknown transport service: {}",
            service
        )))
    }

    pub fn implicit_tls(&self) -> bool {
        self.port == IMPLICIT_TLS_PORT
    }
}

fn well_known_service(service: &str) -> Option<(&'static str, u16)> {
    let relay = match service.to_ascii_lowercase().as_str() {
        "gmail" | "googlemail" => ("smtp.gmail.com", 465),
        "outlook" | "hotmail" | "outlook.com" => ("smtp-mail.outlook.com", 587),
        "outlook365" | "office365" => ("smtp.office365.com", 587),
        "yahoo" => ("smtp.mail.yahoo.com", 465),
        "zoho" => ("smtp.zoho.com", 465),
        "icloud" => ("smtp.mail.me.com", 587),
        "sendgrid" => ("smtp.sendgrid.net", 587),
        "mailgun" => ("smtp.mailgun.org", 465),
        "ses" => ("email-smtp.us-east-1.amazonaws.com", 465),
        _ => return None,
    };
    Some(relay)
}

/// Mail transport backed by lettre's async SMTP client
pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    endpoint: RelayEndpoint,
}

impl SmtpMailTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, ContactflowError> {
        let endpoint = RelayEndpoint::resolve(config)?;

        let builder = if endpoint.implicit_tls() {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&endpoint.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&endpoint.host)
        }
        .map_err(|e| ContactflowError::Config(format!("Failed to create SMTP relay: {}", e)))?;

        let (credentials, mechanisms) = credentials(&config.auth)?;
        let transport = builder
            .port(endpoint.port)
            .credentials(credentials)
            .authentication(mechanisms)
            .build();

        tracing::info!(
            host = %endpoint.host,
            port = endpoint.port,
            "SMTP transport configured"
        );

        Ok(Self {
            transport,
            endpoint,
        })
    }
}

fn credentials(auth: &TransportAuth) -> Result<(Credentials, Vec<Mechanism>), ContactflowError> {
    match (&auth.pass, &auth.access_token) {
        (Some(pass), None) => Ok((
            Credentials::new(auth.user.clone(), pass.clone()),
            vec![Mechanism::Plain, Mechanism::Login],
        )),
        (None, Some(token)) => Ok((
            Credentials::new(auth.user.clone(), token.clone()),
            vec![Mechanism::Xoauth2],
        )),
        _ => Err(ContactflowError::Config(
            "transport.auth requires exactly one of pass or accessToken".to_string(),
        )),
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn verify_connection(&self) -> Result<(), TransportError> {
        let connected = self.transport.test_connection().await?;
        if !connected {
            return Err(TransportError::new(format!(
                "Relay {}:{} did not accept the connection",
                self.endpoint.host, self.endpoint.port
            )));
        }

        tracing::debug!(host = %self.endpoint.host, "SMTP relay connection verified");
        Ok(())
    }

    async fn send_message(&self, email: &EmailMessage) -> Result<SendReceipt, TransportError> {
        let message = to_mime_message(email)?;
        let response = self.transport.send(message).await?;

        let receipt = SendReceipt {
            code: Some(response.code().to_string()),
            response: response.message().next().map(|s| s.to_string()),
        };

        tracing::info!(
            host = %self.endpoint.host,
            code = ?receipt.code,
            "Email sent via SMTP"
        );
        Ok(receipt)
    }
}
