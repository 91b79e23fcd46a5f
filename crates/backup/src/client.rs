//! Gist REST client.

use std::collections::HashMap;

use reqwest::Client;
use tracing::{debug, instrument};

use ordem_core::GistConfig;

use crate::error::BackupError;
use crate::types::{ApiErrorBody, FileContent, GistResponse, UpdateGistRequest};

/// Gist API base URL.
const GIST_API_BASE: &str = "https://api.github.com/gists";

/// The endpoint rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("ordem-backup/", env!("CARGO_PKG_VERSION"));

/// Client for the gist-hosting backup endpoint.
///
/// Stateless apart from the shared HTTP connection pool; the per-call
/// [`GistConfig`] carries the gist ID, access token and filename.
#[derive(Debug, Clone)]
pub struct GistClient {
    client: Client,
}

impl Default for GistClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GistClient {
    /// Create a new client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Push exported snapshot text into the configured file.
    ///
    /// One `PATCH` round trip, no retry. The content is whatever the caller
    /// exported at call time.
    ///
    /// # Errors
    ///
    /// Fails fast with [`BackupError::Config`] on an incomplete
    /// configuration; transport and API failures map to their variants.
    #[instrument(skip(self, config, content), fields(filename = %config.filename))]
    pub async fn push(&self, config: &GistConfig, content: String) -> Result<(), BackupError> {
        validate_config(config)?;

        let mut files = HashMap::new();
        files.insert(config.filename.clone(), FileContent { content });
        let body = UpdateGistRequest { files };

        let response = self
            .client
            .patch(format!("{GIST_API_BASE}/{}", config.gist_id))
            .header("Authorization", format!("token {}", config.token))
            .header("User-Agent", USER_AGENT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response).await);
        }

        debug!("snapshot pushed to gist");
        Ok(())
    }

    /// Fetch the configured file's content.
    ///
    /// The caller is responsible for feeding the returned text into the
    /// store's import.
    ///
    /// # Errors
    ///
    /// Fails fast with [`BackupError::Config`] on an incomplete
    /// configuration; [`BackupError::FileNotFound`] when the gist exists
    /// but the named file is absent.
    #[instrument(skip(self, config), fields(filename = %config.filename))]
    pub async fn pull(&self, config: &GistConfig) -> Result<String, BackupError> {
        validate_config(config)?;

        let response = self
            .client
            .get(format!("{GIST_API_BASE}/{}", config.gist_id))
            .header("Authorization", format!("token {}", config.token))
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response).await);
        }

        let gist: GistResponse = response
            .json()
            .await
            .map_err(|e| BackupError::Parse(e.to_string()))?;

        let content = gist
            .files
            .get(&config.filename)
            .and_then(|f| f.content.clone())
            .ok_or_else(|| BackupError::FileNotFound(config.filename.clone()))?;

        debug!(bytes = content.len(), "snapshot pulled from gist");
        Ok(content)
    }

    /// Check that the gist is reachable with the given credentials.
    ///
    /// # Errors
    ///
    /// Fails with [`BackupError::Config`] when gist ID or token is empty;
    /// transport and API failures map to their variants.
    #[instrument(skip(self, config))]
    pub async fn test_connection(&self, config: &GistConfig) -> Result<(), BackupError> {
        if config.gist_id.is_empty() || config.token.is_empty() {
            return Err(BackupError::Config(
                "gist ID and access token are required".to_string(),
            ));
        }

        let response = self
            .client
            .get(format!("{GIST_API_BASE}/{}", config.gist_id))
            .header("Authorization", format!("token {}", config.token))
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response).await);
        }

        debug!("gist reachable");
        Ok(())
    }
}

fn validate_config(config: &GistConfig) -> Result<(), BackupError> {
    if config.gist_id.is_empty() || config.token.is_empty() || config.filename.is_empty() {
        return Err(BackupError::Config(
            "gist ID, access token and filename are all required".to_string(),
        ));
    }
    Ok(())
}

/// Turn a non-success response into an `Api` error, using the endpoint's
/// message when the body is parseable.
async fn api_error(status: u16, response: reqwest::Response) -> BackupError {
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| "unknown error".to_string());
    BackupError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(gist_id: &str, token: &str, filename: &str) -> GistConfig {
        GistConfig {
            gist_id: gist_id.to_string(),
            token: token.to_string(),
            filename: filename.to_string(),
        }
    }

    #[tokio::test]
    async fn test_push_rejects_incomplete_config() {
        let client = GistClient::new();
        for incomplete in [
            config("", "tok", "backup.json"),
            config("abc", "", "backup.json"),
            config("abc", "tok", ""),
        ] {
            let result = client.push(&incomplete, "{}".to_string()).await;
            assert!(matches!(result, Err(BackupError::Config(_))));
        }
    }

    #[tokio::test]
    async fn test_pull_rejects_incomplete_config() {
        let client = GistClient::new();
        let result = client.pull(&config("", "", "")).await;
        assert!(matches!(result, Err(BackupError::Config(_))));
    }

    #[tokio::test]
    async fn test_connection_requires_id_and_token_only() {
        let client = GistClient::new();
        // Filename may be empty for a connection test
        let result = client.test_connection(&config("abc", "", "")).await;
        assert!(matches!(result, Err(BackupError::Config(_))));
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("ordem-backup/"));
    }
}
