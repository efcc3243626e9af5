/// Outgoing email models
use serde::{Deserialize, Serialize};

/// Contact email ready to hand to a mail transport
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub reply_to: String,
    pub text: String,
    pub html: String,
}

/// Result of a successful send
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SendReceipt {
    /// Relay reply code (e.g. "250")
    pub code: Option<String>,
    /// First line of the relay's reply
    pub response: Option<String>,
}
