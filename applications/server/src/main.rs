/// Songscope Server - Music analytics API
use clap::{Parser, Subcommand};
use songscope_server::{config::ServerConfig, create_router, state::AppState};
use songscope_storage::SqliteCatalog;
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "songscope-server")]
#[command(about = "Songscope music analytics API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Load songs from a Spotify/YouTube dataset CSV
    Import {
        /// CSV file to import
        path: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "songscope_server=info,songscope_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Import { path, config } => {
            import(&path, config.as_deref()).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Songscope Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool =
        songscope_storage::create_pool(&config.storage.database_url, config.storage.max_connections)
            .await?;
    songscope_storage::run_migrations(&pool).await?;
    let catalog = Arc::new(SqliteCatalog::new(pool));
    tracing::info!("Database connected");

    // Build application state
    let app_state = AppState::new(catalog, config.query);

    if let Some(web_dir) = &config.server.web_dir {
        tracing::info!("Serving dashboard from {}", web_dir.display());
    }

    // Build router
    let app = create_router(app_state, config.server.web_dir.as_deref());

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn import(csv_path: &Path, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    let pool =
        songscope_storage::create_pool(&config.storage.database_url, config.storage.max_connections)
            .await?;
    songscope_storage::run_migrations(&pool).await?;

    let summary = songscope_storage::import::import_csv_file(&pool, csv_path).await?;

    println!(
        "Imported {} songs ({} rows skipped)",
        summary.imported, summary.skipped
    );

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}
