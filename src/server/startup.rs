use std::path::PathBuf;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Log level defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the SQLite database named by the configuration.
///
/// For file-backed databases the parent directory is created first so a fresh checkout
/// can start without preparing `data/`. Schema creation and seeding happen afterwards in
/// `ActivityService::ensure_initialized`.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database
/// - `Err(AppError)` - Failed to create the data directory or connect
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    if let Some(parent) = sqlite_file_path(&config.database_url).and_then(|p| {
        p.parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.to_path_buf())
    }) {
        std::fs::create_dir_all(&parent)?;
    }

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    tracing::info!("Connected to database");

    Ok(db)
}

/// Extracts the database file path from a SQLite connection URL.
///
/// Returns `None` for in-memory databases and for URLs of other backends.
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }

    Some(PathBuf::from(path))
}
