use activity_signup::config::ServerConfig;
use activity_signup::server::{create_app, init_tracing, MemoryStorage};
use std::sync::Arc;

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing()?;

    let config = ServerConfig::from_env()?;
    let storage = Arc::new(MemoryStorage::seeded());
    let app = create_app(&config, storage);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        "Serving activities on http://{} (static files from {})",
        config.bind_addr,
        config.static_dir.display()
    );
    axum::serve(listener, app).await?;
    Ok(())
}
