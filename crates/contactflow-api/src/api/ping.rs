/// Liveness endpoint
use contactflow_core::constants::PING_RESPONSE;

/// Always answers `Pong!`; nothing about the request is inspected
pub async fn handler() -> &'static str {
    PING_RESPONSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping() {
        assert_eq!(handler().await, "Pong!");
    }
}
