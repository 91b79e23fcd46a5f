//! User-facing preferences and the remote backup configuration.

use serde::{Deserialize, Serialize};

use crate::types::EditMode;

/// Remote gist backup configuration.
///
/// The access token is plain data (it must survive a round trip through the
/// persistence slot), but `Debug` redacts it and the store blanks it on
/// export.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistConfig {
    pub gist_id: String,
    pub token: String,
    pub filename: String,
}

impl std::fmt::Debug for GistConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GistConfig")
            .field("gist_id", &self.gist_id)
            .field("token", &"[REDACTED]")
            .field("filename", &self.filename)
            .finish()
    }
}

/// Store-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub edit_mode: EditMode,
    pub confirm_navigation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gist: Option<GistConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            edit_mode: EditMode::Modal,
            confirm_navigation: true,
            gist: None,
        }
    }
}
