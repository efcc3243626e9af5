/// Contactflow API - Contact form Lambda
///
/// This module contains the HTTP handlers for liveness, relay health and
/// contact form submissions.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router, body::Body as AxumBody, extract::DefaultBodyLimit, middleware as axum_middleware,
    response::IntoResponse, routing::any,
};
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tracing::info;

/// API Gateway payload limit
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Builds the router serving `/ping`, `/check` and `/contact`
pub fn router(ctx: Arc<ApiContext>) -> Router {
    // Only the contact route is CORS-gated; the method gate wraps the CORS layer
    let contact = Router::new()
        .route("/contact", any(api::contact::handler))
        .route_layer(middleware::contact_cors())
        .route_layer(axum_middleware::from_fn(middleware::method_gate));

    Router::new()
        .route("/ping", any(api::ping::handler))
        .route("/check", any(api::check::handler))
        .merge(contact)
        .route_layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(ctx)
}

/// Main API handler - converts Lambda HTTP request to Axum router
pub async fn handler(ctx: Arc<ApiContext>, event: Request) -> Result<Response<Body>, LambdaError> {
    info!("Processing API request: {} {}", event.method(), event.uri());

    let app = router(ctx);

    // Convert Lambda HTTP request to Axum request
    let (parts, body) = event.into_parts();
    let axum_request = http::Request::from_parts(parts, AxumBody::from(body.to_vec()));

    let response = match app.oneshot(axum_request).await {
        Ok(response) => response,
        Err(err) => {
            let err = ApiError::Internal(format!("Axum router error: {}", err));
            err.log();
            err.into_response()
        }
    };

    // Convert Axum response body to Lambda response body
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    Ok(Response::from_parts(parts, Body::from(body_bytes.to_vec())))
}
