/// Configuration and mail transport services
pub mod config;
pub mod smtp;
pub mod transport;

// Re-export service traits
pub use config::ConfigProvider;
pub use smtp::SmtpMailTransport;
pub use transport::{MailTransport, TransportError};
