use std::sync::Arc;

use onboard_api::admin::store::ConfigStore;
use onboard_api::config::ServerConfig;
use onboard_api::server;
use onboard_api::users::store::UserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;

    eprintln!("🧭 Onboard API v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Listening: http://0.0.0.0:{}", config.port);
    match &config.allowed_origin {
        Some(origin) => eprintln!("   CORS: {origin}"),
        None => eprintln!("   CORS: any origin"),
    }

    let config_store = Arc::new(ConfigStore::new());
    let user_store = Arc::new(UserStore::new());

    let app = server::app(&config, Arc::clone(&config_store), Arc::clone(&user_store))?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Onboarding API started");
    axum::serve(listener, app).await?;

    Ok(())
}
