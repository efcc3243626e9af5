//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

pub mod fake_transport;

use axum::{Router, body::Body, http::Request, response::Response};
use contactflow_api::{ApiContext, router};
use contactflow_core::models::{ContactflowConfig, EnvelopeConfig, TransportAuth, TransportConfig};
use fake_transport::FakeTransport;
use std::sync::Arc;
use tower::ServiceExt;

/// Configuration shared by the integration tests
pub fn test_config() -> ContactflowConfig {
    ContactflowConfig {
        transport: TransportConfig {
            service: Some("gmail".to_string()),
            host: None,
            port: None,
            auth: TransportAuth {
                user: "relay@acme.com".to_string(),
                pass: Some("secret".to_string()),
                access_token: None,
            },
        },
        envelope: EnvelopeConfig {
            sender: "Contact Form <relay@acme.com>".to_string(),
            recipient: "owner@acme.com".to_string(),
            subject: "Nuevo mensaje de contacto".to_string(),
        },
    }
}

/// Router wired to the given fake transport
pub fn app(transport: &FakeTransport) -> Router {
    router(ApiContext::with_transport(
        test_config(),
        Arc::new(transport.clone()),
    ))
}

/// Sends one request and returns status and body text
pub async fn send(app: Router, request: Request<Body>) -> (u16, String) {
    let response: Response = app.oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// JSON POST to /contact
pub fn contact_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// The submission used throughout the contact tests
pub fn jane_doe() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane.doe@email.com",
        "message": "Hello World!"
    })
}
