use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, Level};

use shift_planner_backend::{create_router, initialize_backend};

/// Data directory for persisted state, under the platform data dir.
fn data_directory() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shift-planner")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let base_directory = data_directory();
    info!("Using data directory {:?}", base_directory);

    let app_state = initialize_backend(&base_directory)?;
    let app = create_router(app_state);

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
