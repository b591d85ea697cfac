//! Campus ERP server — institutional management backend.
//!
//! Main entry point that wires all crates together and starts the
//! server.

use tracing_subscriber::{EnvFilter, fmt};

use campus_core::config::AppConfig;
use campus_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("CAMPUS_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Campus ERP v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Create data directories ──────────────────────────
    create_data_directories(&config).await?;

    // ── Step 2: Database connection + migrations ─────────────────
    let db_pool = campus_database::connection::create_pool(&config.database).await?;
    campus_database::migration::run_migrations(&db_pool).await?;

    // ── Step 3: Wire application state ───────────────────────────
    let state = campus_api::state::AppState::build(config.clone(), db_pool);

    // ── Step 4: Initial credential reconcile ─────────────────────
    // Brings the credentials file in line with whatever roster the
    // database already holds, and creates it on first run.
    let roster_ids = state.student_repo.list_ids().await?;
    state.vault.reconcile(&roster_ids).await?;

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app = campus_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Campus ERP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Campus ERP server shut down gracefully");
    Ok(())
}

/// Create required data directories
async fn create_data_directories(config: &AppConfig) -> Result<(), AppError> {
    let mut dirs = vec![config.storage.receipts_dir.clone()];

    if let Some(parent) = std::path::Path::new(&config.credentials.path).parent() {
        if !parent.as_os_str().is_empty() {
            dirs.push(parent.display().to_string());
        }
    }

    for dir in &dirs {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create dir '{dir}': {e}")))?;
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
