//! Export the aggregate to a JSON file.

use std::path::Path;

use tracing::info;

use super::open_store;

/// Write the exported snapshot to `output`.
///
/// # Errors
///
/// Returns an error if export serialization or the file write fails.
pub async fn run(data_file: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(data_file);
    let exported = store.export_snapshot()?;

    tokio::fs::write(output, &exported).await?;
    info!(
        path = %output.display(),
        bytes = exported.len(),
        "snapshot exported"
    );

    Ok(())
}
