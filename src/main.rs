// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;

use ops_dashboard::application::dashboard_service::DashboardService;
use ops_dashboard::application::document_source::DocumentSource;
use ops_dashboard::infrastructure::config::{load_dashboard_config, SourceKind};
use ops_dashboard::infrastructure::file_source::FileDocumentSource;
use ops_dashboard::infrastructure::http_source::HttpDocumentSource;
use ops_dashboard::presentation::app_state::AppState;
use ops_dashboard::presentation::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create document source (infrastructure layer)
    let source: Arc<dyn DocumentSource> = match config.source.kind {
        SourceKind::File => Arc::new(FileDocumentSource::new(&config.source.base_dir)),
        SourceKind::Http => {
            if config.source.base_url.is_empty() {
                anyhow::bail!("source.base_url is required when source.kind = \"http\"");
            }
            Arc::new(HttpDocumentSource::new(config.source.base_url.clone()))
        }
    };
    tracing::info!("Reading dashboard documents from {:?} source", config.source.kind);

    // Create service (application layer)
    let dashboard_service = DashboardService::new(source, config.paths.to_map());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        default_tab: config.tabs.default.clone(),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting ops-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
