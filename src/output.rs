//! Dataset file writing.

use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Write the concatenated CSV dataset to `path`, overwriting any existing
/// file
///
/// # Errors
/// Returns [`crate::Error::Io`] if the file cannot be written.
pub async fn write_dataset(path: impl AsRef<Path>, data: &str) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, data).await?;
    info!(path = %path.display(), bytes = data.len(), "dataset written");
    Ok(())
}
