//! Environment/runtime helpers
//!
//! Sanity checks to ensure the store location is usable at startup.

use std::path::Path;

use tracing::warn;

/// Ensure the store file's parent directory exists; warn when the table file
/// itself is missing. The file is never created here — the store refuses to
/// open without a seeded table.
pub async fn ensure_store_dir(store_path: &str) -> anyhow::Result<()> {
    let path = Path::new(store_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    if tokio::fs::metadata(path).await.is_err() {
        warn!(%store_path, "store file not found; the server will not start without a seeded table");
    }
    Ok(())
}
