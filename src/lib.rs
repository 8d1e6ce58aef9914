pub mod analytics; // Statistics, categorical analytics, health score
pub mod api; // HTTP surface
pub mod config;
pub mod db;
pub mod history; // Client history + summary
pub mod models;
pub mod records; // Record providers
pub mod report; // Report assembler
pub mod timeline; // Merged client timeline
pub mod window; // Window filter

#[cfg(test)]
pub(crate) mod fixtures;

use tracing_subscriber::EnvFilter;

/// Initialise logging, open the database, and serve the API until Ctrl-C.
pub async fn run() -> Result<(), api::StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let db_path = config::database_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    // Fail fast on an unusable database rather than on the first request.
    if let Err(e) = db::open_database(&db_path) {
        tracing::error!(path = %db_path.display(), "Cannot open database: {e}");
        return Err(api::StartupError::Database(e));
    }
    tracing::info!(path = %db_path.display(), "Database ready");

    let addr = api::server::parse_bind_address(&config::bind_address())?;
    api::serve(api::ApiContext::new(db_path), addr).await
}
