/// Mail relay health endpoint
use axum::extract::State;
use contactflow_core::ContactflowError;
use contactflow_core::constants::TRANSPORT_READY_RESPONSE;
use std::sync::Arc;
use tracing::info;

use crate::{context::ApiContext, error::ApiError};

/// Verifies the relay connection; any failure maps to 400
pub async fn handler(State(ctx): State<Arc<ApiContext>>) -> Result<&'static str, ApiError> {
    match ctx.transport.verify_connection().await {
        Ok(()) => {
            info!("Mail relay ready to accept messages");
            Ok(TRANSPORT_READY_RESPONSE)
        }
        Err(e) => {
            let err = ApiError::from(ContactflowError::TransportVerifyFailed(e));
            err.log();
            Err(err)
        }
    }
}
