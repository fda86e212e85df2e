use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hive_ai_engine::{api, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hive_ai_server=debug,hive_ai_engine=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env()?;

    tracing::info!("🚀 Starting Hive AI Service v{}", hive_ai_engine::VERSION);
    tracing::info!("🔤 Tokenizer: {:?}", config.engine.token_pattern);
    tracing::info!("🌐 CORS origins: {}", config.allowed_origins.join(", "));

    let app = api::build_app(&config)?;

    let addr = config.bind_address();
    tracing::info!("🧠 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("✅ Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Received Ctrl-C, shutting down...");
}
