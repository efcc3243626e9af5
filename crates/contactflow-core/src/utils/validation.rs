/// Contact form validation
use crate::constants::{EMAIL_FIELD, MESSAGE_FIELD, NAME_FIELD};
use crate::error::ContactflowError;
use crate::models::{ContactPayload, ContactRequest};
use serde_json::Value;

/// Validates a submission and extracts the payload.
///
/// Checks run in a fixed order and the first failure wins: honeypot, then
/// `name`, `email`, `message`. Values are copied as submitted.
pub fn validate_submission(req: &ContactRequest) -> Result<ContactPayload, ContactflowError> {
    if req.bot_trap.as_ref().is_some_and(is_truthy) {
        return Err(ContactflowError::SpamRejected);
    }

    let name = required_text(req.name.as_ref(), NAME_FIELD)?;
    let email = required_text(req.email.as_ref(), EMAIL_FIELD)?;
    let message = required_text(req.message.as_ref(), MESSAGE_FIELD)?;

    Ok(ContactPayload {
        name,
        email,
        message,
    })
}

/// Form truthiness: null, false, 0 and "" are falsy, everything else is truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn required_text(value: Option<&Value>, field: &'static str) -> Result<String, ContactflowError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(v) if matches!(v, Value::Number(_) | Value::Bool(_)) && is_truthy(v) => {
            Ok(v.to_string())
        }
        _ => Err(ContactflowError::MissingField(field)),
    }
}
