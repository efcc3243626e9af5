/// Logging utilities for PII redaction
///
/// Contact submissions carry the submitter's address and free text; these
/// helpers keep both out of log records.
use regex::Regex;
use std::sync::LazyLock;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use contactflow_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("Reply to test@acme.com"), "Reply to ***@acme.com");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

/// Creates safe log context for a contact submission
pub fn safe_submission_context(email: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "reply_to_domain": extract_domain(email),
        "message": redact_body(message),
    })
}

/// Extracts domain from email address for safe logging
fn extract_domain(email: &str) -> String {
    email.split('@').nth(1).unwrap_or("unknown").to_string()
}
