/// CORS gate for the contact endpoint
use axum::{
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// Value of the `Allow` header on rejected methods
const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// CORS headers for the contact endpoint: any origin, POST and OPTIONS only.
/// Preflight requests are answered by this layer directly.
pub fn contact_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Sits outside [`contact_cors`]: lets POST and CORS preflights through,
/// ends a bare OPTIONS with 204 and rejects every other method
pub async fn method_gate(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    if method == Method::OPTIONS {
        if request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
        {
            return next.run(request).await;
        }
        return StatusCode::NO_CONTENT.into_response();
    }
    if method == Method::POST {
        return next.run(request).await;
    }

    warn!(method = %method, path = %request.uri().path(), "Method rejected by CORS gate");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ALLOWED_METHODS)],
        "Method Not Allowed",
    )
        .into_response()
}
