//! Request/response types for the gist REST endpoint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// PATCH body: `{"files": {"<name>": {"content": "..."}}}`.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateGistRequest {
    pub files: HashMap<String, FileContent>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FileContent {
    pub content: String,
}

/// GET response: the `files` map keyed by filename.
#[derive(Debug, Deserialize)]
pub(crate) struct GistResponse {
    #[serde(default)]
    pub files: HashMap<String, GistFile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GistFile {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error body shape: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_shape() {
        let mut files = HashMap::new();
        files.insert(
            "backup.json".to_string(),
            FileContent {
                content: "{}".to_string(),
            },
        );
        let body = UpdateGistRequest { files };

        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["files"]["backup.json"]["content"], "{}");
    }

    #[test]
    fn test_gist_response_tolerates_missing_fields() {
        let response: GistResponse = serde_json::from_str("{}").expect("deserialize");
        assert!(response.files.is_empty());

        let response: GistResponse =
            serde_json::from_str(r#"{"files":{"a.json":{}}}"#).expect("deserialize");
        assert!(response.files["a.json"].content.is_none());
    }
}
