use splitsheet::api::app;
use splitsheet::config::CONFIG;
use splitsheet::{CsvExportWriter, InMemoryLogging, InMemoryStorage, SplitsheetService};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();
    info!("Loaded configuration: {:?}", *CONFIG);

    // Initialize storage, audit logging and export
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let exporter = CsvExportWriter::new();
    let service = Arc::new(
        SplitsheetService::new(storage, logging, exporter, CONFIG.jwt_secret.clone())
            .with_hash_cost(CONFIG.bcrypt_cost),
    );

    let app = app(service);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
