//! Reset the store to the fixed seed dataset.

use std::path::Path;

use tracing::info;

use super::open_store;

/// Discard the current aggregate and start over from seed.
///
/// # Errors
///
/// Returns an error if the slot file cannot be opened.
pub fn run(data_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(data_file);
    store.reset_to_seed();

    let snapshot = store.snapshot();
    info!(path = %data_file.display(), "store reset to seed dataset");
    info!("  Clients: {}", snapshot.clients.len());
    info!("  Equipment: {}", snapshot.equipment.len());
    info!("  Service orders: {}", snapshot.orders.len());

    Ok(())
}
