//! Manual remote backup against the configured gist.

use std::path::Path;

use tracing::{info, warn};

use ordem_backup::GistClient;
use ordem_core::GistConfig;
use ordem_store::DataStore;

use super::open_store;

/// Environment variable overriding the stored access token.
const TOKEN_ENV: &str = "ORDEM_GIST_TOKEN";

/// Store the gist coordinates (and optionally the token) in settings.
///
/// # Errors
///
/// Returns an error if the slot file cannot be opened.
pub fn configure(
    data_file: &Path,
    gist_id: String,
    filename: String,
    token: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(data_file);
    let mut settings = store.settings();

    if token.is_none() {
        warn!("no --token given; the token must come from {TOKEN_ENV} at push/pull time");
    }

    settings.gist = Some(GistConfig {
        gist_id,
        token: token.unwrap_or_default(),
        filename,
    });
    store.update_settings(settings);

    info!("remote backup configured");
    Ok(())
}

/// Push the current snapshot to the gist.
///
/// # Errors
///
/// Returns an error if backup is unconfigured, export fails, or the
/// endpoint rejects the request.
pub async fn push(data_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let store = open_store(data_file);
    let config = gist_config(&store)?;
    let content = store.export_snapshot()?;

    GistClient::new().push(&config, content).await?;
    info!(filename = %config.filename, "snapshot pushed to gist");
    Ok(())
}

/// Pull the snapshot from the gist and import it.
///
/// # Errors
///
/// Returns an error if backup is unconfigured, the fetch fails, or the
/// fetched payload fails import validation (the local aggregate is left
/// untouched in that case).
pub async fn pull(data_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let mut store = open_store(data_file);
    let config = gist_config(&store)?;

    let text = GistClient::new().pull(&config).await?;
    let stats = store.import_snapshot(&text)?;

    info!(filename = %config.filename, "snapshot pulled from gist");
    info!("  Service orders: {}", stats.orders);
    info!("  Clients: {}", stats.clients);
    info!("  Equipment: {}", stats.equipment);
    Ok(())
}

/// Check that the gist is reachable with the configured credentials.
///
/// # Errors
///
/// Returns an error if backup is unconfigured or the gist is unreachable.
pub async fn test(data_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let store = open_store(data_file);
    let config = gist_config(&store)?;

    GistClient::new().test_connection(&config).await?;
    info!(gist_id = %config.gist_id, "gist reachable");
    Ok(())
}

/// Resolve the gist configuration from settings, with the token
/// overridable (or supplied entirely) via the environment.
fn gist_config(store: &DataStore) -> Result<GistConfig, Box<dyn std::error::Error>> {
    let mut config = store
        .settings()
        .gist
        .ok_or("remote backup is not configured; run `ordem backup configure` first")?;

    if let Ok(token) = std::env::var(TOKEN_ENV) {
        config.token = token;
    }

    Ok(config)
}
