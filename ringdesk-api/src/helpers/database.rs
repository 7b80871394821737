use crate::config::ApiConfig;
use crate::database::Database;
use std::path::PathBuf;
use std::sync::Arc;

/// Returns the path to the ringdesk database
///
/// A `[database] path` in the config wins; otherwise the file lives in the
/// platform data directory.
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/ringdesk/ringdesk.db`
/// - **Linux**: `~/.local/share/ringdesk/ringdesk.db`
/// - **Windows**: `%LOCALAPPDATA%\ringdesk\ringdesk.db`
pub fn get_db_path(config: &ApiConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = config.database_path() {
        return Ok(path);
    }

    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("ringdesk").join("ringdesk.db"))
}

/// Initialize the database connection
pub fn initialize_database(config: &ApiConfig) -> anyhow::Result<Arc<Database>> {
    let db_path = get_db_path(config)?;
    let db = Database::new(&db_path)?;
    tracing::info!("Database initialized at: {}", db_path.display());
    Ok(Arc::new(db))
}
