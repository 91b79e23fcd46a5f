//! Versioned envelope wrapped around the aggregate in the persistence slot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use ordem_core::Snapshot;

/// Format version tag. Slot contents with a different tag are discarded at
/// open and replaced by the seed dataset.
pub(crate) const STORAGE_VERSION: &str = "1.0.0";

/// Slot wire format: `{"version": ..., "data": ..., "lastUpdated": ...}`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope {
    pub version: String,
    pub data: Snapshot,
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
}

impl Envelope {
    /// Wrap a snapshot for writing, stamped now.
    pub fn wrap(data: Snapshot) -> Self {
        Self {
            version: STORAGE_VERSION.to_string(),
            data,
            last_updated: Utc::now(),
        }
    }

    /// Parse slot contents. Returns `None` (never an error) on malformed
    /// JSON or a version mismatch - both mean "start from seed".
    pub fn parse(contents: &str) -> Option<Snapshot> {
        let envelope: Self = match serde_json::from_str(contents) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(error = %e, "discarding unreadable slot contents");
                return None;
            }
        };

        if envelope.version != STORAGE_VERSION {
            warn!(
                found = %envelope.version,
                expected = STORAGE_VERSION,
                "discarding slot contents with mismatched version"
            );
            return None;
        }

        Some(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_roundtrip() {
        let envelope = Envelope::wrap(Snapshot::default());
        let text = serde_json::to_string(&envelope).expect("serialize");
        assert!(text.contains("\"version\":\"1.0.0\""));
        assert!(text.contains("\"lastUpdated\""));

        let parsed = Envelope::parse(&text).expect("parse");
        assert_eq!(parsed, Snapshot::default());
    }

    #[test]
    fn test_parse_rejects_version_mismatch() {
        let mut envelope = Envelope::wrap(Snapshot::default());
        envelope.version = "0.9.0".to_string();
        let text = serde_json::to_string(&envelope).expect("serialize");
        assert!(Envelope::parse(&text).is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Envelope::parse("not json").is_none());
        assert!(Envelope::parse("{\"version\":\"1.0.0\"}").is_none());
    }
}
