/// Contact form endpoint
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
};
use contactflow_core::ContactflowError;
use contactflow_core::constants::EMAILS_PER_SUBMISSION;
use contactflow_core::models::ContactRequest;
use contactflow_core::utils::{redact_email, safe_submission_context, validate_submission};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::{context::ApiContext, error::ApiError};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Validates a submission, emails it to the configured recipient and
/// answers with the number of emails sent
pub async fn handler(
    State(ctx): State<Arc<ApiContext>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String, ApiError> {
    submit(&ctx, &headers, &body).await.inspect_err(ApiError::log)
}

async fn submit(ctx: &ApiContext, headers: &HeaderMap, body: &[u8]) -> Result<String, ApiError> {
    let request = decode_body(headers, body)?;
    let payload = validate_submission(&request)?;
    let email = ctx.composer.compose(&payload);

    info!(
        reply_to = %redact_email(&email.reply_to),
        context = %safe_submission_context(&payload.email, &payload.message),
        "Sending contact email"
    );

    let receipt = ctx
        .transport
        .send_message(&email)
        .await
        .map_err(ContactflowError::TransportSendFailed)?;

    info!(code = ?receipt.code, "Contact email sent");
    Ok(EMAILS_PER_SUBMISSION.to_string())
}

/// Decodes a form-encoded or JSON body; an empty body or a JSON body that is
/// not an object is an empty form
pub fn decode_body(headers: &HeaderMap, body: &[u8]) -> Result<ContactRequest, ContactflowError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ContactRequest::default());
    }

    let is_form = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().starts_with(FORM_CONTENT_TYPE));

    if is_form {
        let fields: HashMap<String, String> = serde_urlencoded::from_bytes(body)
            .map_err(|e| ContactflowError::MalformedBody(e.to_string()))?;
        return Ok(serde_json::from_value(serde_json::to_value(fields)?)?);
    }

    match serde_json::from_slice::<Value>(body)? {
        object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
        _ => Ok(ContactRequest::default()),
    }
}
