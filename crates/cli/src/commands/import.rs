//! Import an exported JSON file, replacing the aggregate.

use std::path::Path;

use tracing::info;

use super::open_store;

/// Read `file` and replace the aggregate with its contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation; a
/// failed validation leaves the existing aggregate untouched.
pub async fn run(data_file: &Path, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let text = tokio::fs::read_to_string(file).await?;

    let mut store = open_store(data_file);
    let stats = store.import_snapshot(&text)?;

    info!(path = %file.display(), "snapshot imported");
    info!("  Service orders: {}", stats.orders);
    info!("  Clients: {}", stats.clients);
    info!("  Equipment: {}", stats.equipment);

    Ok(())
}
