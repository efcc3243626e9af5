/// Application constants
///
/// Fixed response bodies, template labels and transport defaults.
// ============================================================================
// Response Bodies
// ============================================================================
/// Liveness response body
pub const PING_RESPONSE: &str = "Pong!";

/// Transport check success body
pub const TRANSPORT_READY_RESPONSE: &str = "Success: Server ready to take our messages";

/// Number of emails sent for one accepted submission
pub const EMAILS_PER_SUBMISSION: usize = 1;

/// Prefix for every plain-text error response
pub const ERROR_PREFIX: &str = "Error: ";

// ============================================================================
// Contact Form Fields
// ============================================================================

/// Honeypot field that legitimate users never fill in
pub const BOT_TRAP_FIELD: &str = "botTrap";

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const MESSAGE_FIELD: &str = "message";

// ============================================================================
// Email Template
// ============================================================================

pub const TEMPLATE_TITLE: &str = "Formulario de contacto";
pub const TEMPLATE_NAME_LABEL: &str = "Nombre";
pub const TEMPLATE_EMAIL_LABEL: &str = "Email";

/// Subject used when none is configured
pub const DEFAULT_SUBJECT: &str = "Nuevo mensaje de contacto";

// ============================================================================
// SMTP Transport
// ============================================================================

/// Submission port (STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Port that speaks TLS from the first byte
pub const IMPLICIT_TLS_PORT: u16 = 465;

// ============================================================================
// Environment Variables
// ============================================================================

/// Path to a JSON configuration file; takes precedence over the variables below
pub const ENV_CONFIG_PATH: &str = "CONTACTFLOW_CONFIG";

pub const ENV_SMTP_SERVICE: &str = "SMTP_SERVICE";
pub const ENV_SMTP_HOST: &str = "SMTP_HOST";
pub const ENV_SMTP_PORT: &str = "SMTP_PORT";
pub const ENV_SMTP_USER: &str = "SMTP_USER";
pub const ENV_SMTP_PASS: &str = "SMTP_PASS";
pub const ENV_SMTP_ACCESS_TOKEN: &str = "SMTP_ACCESS_TOKEN";
pub const ENV_MAIL_SENDER: &str = "MAIL_SENDER";
pub const ENV_MAIL_RECIPIENT: &str = "MAIL_RECIPIENT";
pub const ENV_MAIL_SUBJECT: &str = "MAIL_SUBJECT";
