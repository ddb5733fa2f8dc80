use std::path::Path;

use cambio_core::{CambioError, Snapshot};

/// Render a snapshot as two-space indented JSON.
///
/// # Errors
/// Returns `Data` if serialization fails.
pub fn render_snapshot(snapshot: &Snapshot) -> Result<String, CambioError> {
    serde_json::to_string_pretty(snapshot)
        .map_err(|e| CambioError::Data(format!("failed to encode snapshot: {e}")))
}

/// Write `snapshot` to `path`, replacing any previous content.
///
/// # Errors
/// Returns `Persist` if the file cannot be written.
pub async fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), CambioError> {
    let json = render_snapshot(snapshot)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| CambioError::persist(path.display().to_string(), e.to_string()))?;

    #[cfg(feature = "tracing")]
    tracing::info!(path = %path.display(), "snapshot written");

    Ok(())
}
