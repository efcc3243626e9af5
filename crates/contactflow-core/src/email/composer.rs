/// Contact email composer using lettre crate
use crate::constants::{TEMPLATE_EMAIL_LABEL, TEMPLATE_NAME_LABEL, TEMPLATE_TITLE};
use crate::models::{ContactPayload, EmailMessage, EnvelopeConfig};
use crate::services::transport::TransportError;
use lettre::message::{Mailbox, Message, MultiPart, SinglePart, header::ContentType};

/// Builds contact emails for a fixed envelope
#[derive(Debug, Clone)]
pub struct EmailComposer {
    envelope: EnvelopeConfig,
}

impl EmailComposer {
    pub fn new(envelope: EnvelopeConfig) -> Self {
        Self { envelope }
    }

    /// Composes the email for a validated submission.
    ///
    /// Submitted values are interpolated into the HTML body without escaping.
    pub fn compose(&self, payload: &ContactPayload) -> EmailMessage {
        EmailMessage {
            from: self.envelope.sender.clone(),
            to: self.envelope.recipient.clone(),
            subject: self.envelope.subject.clone(),
            reply_to: payload.email.clone(),
            text: render_text(payload),
            html: render_html(payload),
        }
    }
}

fn render_text(payload: &ContactPayload) -> String {
    format!(
        "{TEMPLATE_TITLE}\n\n{TEMPLATE_NAME_LABEL}: {}\n{TEMPLATE_EMAIL_LABEL}: {}\n\n{}\n",
        payload.name, payload.email, payload.message
    )
}

fn render_html(payload: &ContactPayload) -> String {
    format!(
        "<h3>{TEMPLATE_TITLE}</h3>\
         <p><strong>{TEMPLATE_NAME_LABEL}:</strong> {}<br>\
         <strong>{TEMPLATE_EMAIL_LABEL}:</strong> {}</p>\
         <p>{}</p>",
        payload.name, payload.email, payload.message
    )
}

fn to_mailbox(address: &str, role: &str) -> Result<Mailbox, TransportError> {
    address
        .parse()
        .map_err(|e| TransportError::new(format!("Invalid {} address {}: {}", role, address, e)))
}

/// Builds the MIME message (text + HTML alternatives) for an email
pub fn to_mime_message(email: &EmailMessage) -> Result<Message, TransportError> {
    Message::builder()
        .from(to_mailbox(&email.from, "from")?)
        .to(to_mailbox(&email.to, "to")?)
        .reply_to(to_mailbox(&email.reply_to, "reply-to")?)
        .subject(&email.subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(email.text.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(email.html.clone()),
                ),
        )
        .map_err(|e| TransportError::new(format!("Failed to build email: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> EmailComposer {
        EmailComposer::new(EnvelopeConfig {
            sender: "Contact Form <relay@acme.com>".to_string(),
            recipient: "owner@acme.com".to_string(),
            subject: "Nuevo mensaje".to_string(),
        })
    }

    fn jane() -> ContactPayload {
        ContactPayload {
            name: "Jane Doe".to_string(),
            email: "jane.doe@email.com".to_string(),
            message: "Hello World!".to_string(),
        }
    }

    #[test]
    fn test_compose_uses_envelope() {
        let email = composer().compose(&jane());

        assert_eq!(email.from, "Contact Form <relay@acme.com>");
        assert_eq!(email.to, "owner@acme.com");
        assert_eq!(email.subject, "Nuevo mensaje");
        assert_eq!(email.reply_to, "jane.doe@email.com");
    }

    #[test]
    fn test_compose_bodies() {
        let email = composer().compose(&jane());

        assert!(email.text.starts_with("Formulario de contacto"));
        assert!(email.text.contains("Nombre: Jane Doe"));
        assert!(email.text.contains("Email: jane.doe@email.com"));
        assert!(email.text.contains("Hello World!"));

        assert!(email.html.contains("<h3>Formulario de contacto</h3>"));
        assert!(email.html.contains("Jane Doe"));
        assert!(email.html.contains("Hello World!"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        assert_eq!(composer().compose(&jane()), composer().compose(&jane()));
    }

    #[test]
    fn test_html_is_not_escaped() {
        let mut payload = jane();
        payload.message = "<script>alert(1)</script>".to_string();

        let email = composer().compose(&payload);
        assert!(email.html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_mime_message_headers() {
        let email = composer().compose(&jane());
        let message = to_mime_message(&email).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Reply-To: jane.doe@email.com"));
        assert!(raw.contains("To: owner@acme.com"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/html"));
    }

    #[test]
    fn test_mime_message_rejects_bad_reply_to() {
        let mut payload = jane();
        payload.email = "not-an-address".to_string();

        let err = to_mime_message(&composer().compose(&payload)).unwrap_err();
        assert!(err.to_string().contains("reply-to"));
    }
}
