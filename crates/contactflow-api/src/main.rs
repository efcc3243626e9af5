use contactflow_api::ApiContext;
use contactflow_core::services::config::config_provider;
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("Starting Contactflow API Lambda function");

    // Configuration is loaded once and shared read-only by every request
    let config = config_provider()?.get_config().await?;
    let ctx = ApiContext::new(config)?;

    // Run the Lambda runtime with our handler
    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        async move { contactflow_api::handler(ctx, event).await }
    }))
    .await
}
