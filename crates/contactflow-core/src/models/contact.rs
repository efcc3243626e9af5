/// Contact form models
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound contact form body as submitted.
///
/// Fields hold raw JSON values so a submission is never rejected for its
/// shape alone; unknown extra fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default, rename = "botTrap")]
    pub bot_trap: Option<Value>,
}

/// Validated contact submission
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}
