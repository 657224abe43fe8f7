//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::warn;

/// Warn when the front-end asset directory is missing. Returns whether it exists.
pub async fn ensure_env(static_dir: &str) -> bool {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            warn!(%static_dir, "static path is not a directory; site assets will 404");
            false
        }
        Err(_) => {
            warn!(%static_dir, "frontend assets directory not found; static assets may 404");
            false
        }
    }
}
