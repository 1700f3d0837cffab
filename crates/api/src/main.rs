use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lioncash_api::config::{ServerConfig, ValidationMode};
use lioncash_api::router::build_app_router;
use lioncash_api::state::AppState;
use lioncash_content::{ContentCatalog, ContentPaths};
use lioncash_db::repositories::PgFormStore;
use lioncash_db::store::{FormStore, MemoryFormStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lioncash_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, data_dir = %config.data_dir, "Loaded server configuration");

    // --- Content catalog ---
    let paths = ContentPaths::new(&config.data_dir);
    let catalog = ContentCatalog::load(&paths).expect("Failed to load content catalog");

    let issues = catalog.validate();
    for issue in &issues {
        tracing::error!(%issue, "Content validation issue");
    }
    if !issues.is_empty() && config.validation_mode == ValidationMode::Strict {
        panic!(
            "Content validation failed with {} issue(s); refusing to start",
            issues.len()
        );
    }

    // --- Submission store ---
    // With DATABASE_URL set, submissions persist to Postgres; without it the
    // server runs on an in-memory store and loses submissions on restart.
    let store: Arc<dyn FormStore> = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = lioncash_db::create_pool(&database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            lioncash_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            lioncash_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgFormStore::new(pool))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using in-memory submission store");
            Arc::new(MemoryFormStore::new())
        }
    };

    // --- App state and router ---
    let state = AppState {
        catalog: Arc::new(catalog),
        store,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
