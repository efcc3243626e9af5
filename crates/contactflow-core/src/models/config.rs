/// Configuration models
use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};
use std::fmt;

/// System configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactflowConfig {
    pub transport: TransportConfig,
    pub envelope: EnvelopeConfig,
}

impl ContactflowConfig {
    /// Validates configuration is valid
    pub fn validate(&self) -> Result<(), String> {
        let service_empty = self
            .transport
            .service
            .as_deref()
            .is_none_or(|s| s.trim().is_empty());
        let host_empty = self
            .transport
            .host
            .as_deref()
            .is_none_or(|h| h.trim().is_empty());
        if service_empty && host_empty {
            return Err("Either transport.service or transport.host must be set".to_string());
        }

        if self.transport.port == Some(0) {
            return Err("transport.port must be > 0".to_string());
        }

        let auth = &self.transport.auth;
        if auth.user.trim().is_empty() {
            return Err("transport.auth.user is required".to_string());
        }
        match (&auth.pass, &auth.access_token) {
            (Some(_), Some(_)) => {
                return Err(
                    "transport.auth must set either pass or accessToken, not both".to_string(),
                );
            }
            (None, None) => {
                return Err("transport.auth requires pass or accessToken".to_string());
            }
            _ => {}
        }

        self.envelope
            .sender
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid envelope.sender {}: {}", self.envelope.sender, e))?;
        self.envelope.recipient.parse::<Mailbox>().map_err(|e| {
            format!(
                "Invalid envelope.recipient {}: {}",
                self.envelope.recipient, e
            )
        })?;

        if self.envelope.subject.trim().is_empty() {
            return Err("envelope.subject must not be empty".to_string());
        }

        Ok(())
    }
}

/// Mail relay connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    /// Well-known service name (e.g. "gmail")
    #[serde(default)]
    pub service: Option<String>,
    /// Explicit relay host, overrides the service lookup
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    pub auth: TransportAuth,
}

/// Relay credentials
#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportAuth {
    pub user: String,
    #[serde(default)]
    pub pass: Option<String>,
    /// OAuth2 access token (XOAUTH2) used instead of a password
    #[serde(default)]
    pub access_token: Option<String>,
}

impl fmt::Debug for TransportAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportAuth")
            .field("user", &self.user)
            .field("pass", &self.pass.as_ref().map(|_| "***"))
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Fixed sender/recipient/subject for every outgoing contact email
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvelopeConfig {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactflowConfig {
        serde_json::from_str(
            r#"{
                "transport": {
                    "service": "gmail",
                    "auth": { "user": "relay@acme.com", "pass": "secret" }
                },
                "envelope": {
                    "sender": "Contact Form <relay@acme.com>",
                    "recipient": "owner@acme.com",
                    "subject": "Nuevo mensaje"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_config_deserialization() {
        let config = sample();
        assert_eq!(config.transport.service.as_deref(), Some("gmail"));
        assert_eq!(config.transport.auth.user, "relay@acme.com");
        assert!(config.transport.host.is_none());
        assert_eq!(config.envelope.recipient, "owner@acme.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_access_token_auth() {
        let auth: TransportAuth =
            serde_json::from_str(r#"{"user":"relay@acme.com","accessToken":"ya29.token"}"#)
                .unwrap();
        assert_eq!(auth.access_token.as_deref(), Some("ya29.token"));
        assert!(auth.pass.is_none());
    }

    #[test]
    fn test_validate_requires_service_or_host() {
        let mut config = sample();
        config.transport.service = None;
        assert!(config.validate().is_err());

        config.transport.host = Some("smtp.acme.com".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_credentials() {
        let mut config = sample();
        config.transport.auth.access_token = Some("token".to_string());
        assert!(config.validate().is_err());

        config.transport.auth.pass = None;
        config.transport.auth.access_token = None;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_envelope() {
        let mut config = sample();
        config.envelope.recipient = "not an address".to_string();
        assert!(config.validate().is_err());

        let mut config = sample();
        config.envelope.subject = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_auth_debug_hides_secrets() {
        let config = sample();
        let debug = format!("{:?}", config.transport.auth);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("relay@acme.com"));
    }
}
