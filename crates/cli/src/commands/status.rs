//! Show collection counts and recent audit activity.

use std::path::Path;

use tracing::info;

use super::open_store;

/// Number of trailing audit entries shown.
const AUDIT_TAIL: usize = 5;

/// Summarize the store contents.
///
/// # Errors
///
/// Returns an error if the slot file cannot be opened.
pub fn run(data_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(data_file);
    let snapshot = store.snapshot();

    info!("Store status ({})", data_file.display());
    info!("=============");
    match &snapshot.company {
        Some(company) => info!("Company: {}", company.name),
        None => info!("Company: not configured"),
    }
    info!("Clients: {}", snapshot.clients.len());
    info!("Equipment: {}", snapshot.equipment.len());
    info!("Service orders: {}", snapshot.orders.len());
    info!("Attachments: {}", snapshot.attachments.len());
    info!("Audit entries: {}", snapshot.audit_log.len());
    info!(
        "Remote backup: {}",
        if snapshot.settings.gist.is_some() {
            "configured"
        } else {
            "not configured"
        }
    );

    if !snapshot.audit_log.is_empty() {
        info!("Recent activity:");
        let skip = snapshot.audit_log.len().saturating_sub(AUDIT_TAIL);
        for entry in snapshot.audit_log.iter().skip(skip) {
            info!(
                "  {} {} {} {} ({} field(s) changed)",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.action,
                entry.entity,
                entry.entity_id,
                entry.diff.len()
            );
        }
    }

    Ok(())
}
