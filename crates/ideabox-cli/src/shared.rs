//! Shared helpers used across CLI commands.

use std::sync::Arc;

use ideabox_config::IdeaboxConfig;
use ideabox_registry::IdeaRepository;
use ideabox_store_sqlite::SqliteIdeaRepository;

/// Resolves the database path: `--db` wins over `storage.path`.
pub fn db_path(db: &Option<String>, config: &IdeaboxConfig) -> String {
    db.clone().unwrap_or_else(|| config.storage.path.clone())
}

/// Opens (and migrates) the SQLite idea store.
///
/// # Errors
///
/// Returns an error if the database file cannot be created or opened.
pub fn open_repository(
    db: &Option<String>,
    config: &IdeaboxConfig,
) -> anyhow::Result<Arc<dyn IdeaRepository>> {
    let path = db_path(db, config);
    if let Some(parent) = std::path::Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let repo =
        SqliteIdeaRepository::open(&path).map_err(|e| anyhow::anyhow!("database error: {e}"))?;
    Ok(Arc::new(repo))
}
