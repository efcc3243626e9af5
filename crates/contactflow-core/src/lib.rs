/// Contactflow Core - Shared library for the Contactflow contact-form relay
///
/// This crate contains the configuration, models, validation, email
/// composition and mail-transport abstraction used by the API Lambda.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::ContactflowError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
