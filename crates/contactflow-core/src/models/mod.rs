/// Data models for Contactflow system
pub mod config;
pub mod contact;
pub mod email;

pub use config::*;
pub use contact::*;
pub use email::*;
