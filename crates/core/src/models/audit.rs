//! Audit trail records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AuditAction, AuditEntityKind, AuditLogId};

/// Old/new value pair for one changed field.
///
/// Values are raw JSON so the diff can describe any field of any entity
/// without the audit trail knowing the entity schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub old: serde_json::Value,
    pub new: serde_json::Value,
}

/// Field-level diff: wire field name to old/new pair. Ordered so serialized
/// audit entries are deterministic.
pub type DiffMap = BTreeMap<String, FieldChange>;

/// One append-only audit record. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: AuditLogId,
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub entity: AuditEntityKind,
    pub entity_id: String,
    pub diff: DiffMap,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_audit_entry_serialization() {
        let mut diff = DiffMap::new();
        diff.insert(
            "telefone".to_string(),
            FieldChange {
                old: json!("123"),
                new: json!("456"),
            },
        );

        let entry = AuditLogEntry {
            id: AuditLogId::new("log-test"),
            timestamp: Utc::now(),
            action: AuditAction::Update,
            entity: AuditEntityKind::Cliente,
            entity_id: "cliente-1".to_string(),
            diff,
            comment: "Cliente atualizado".to_string(),
        };

        let json = serde_json::to_value(entry).expect("serialize");
        assert_eq!(json["action"], "update");
        assert_eq!(json["entity"], "cliente");
        assert_eq!(json["diff"]["telefone"]["old"], "123");
        assert_eq!(json["diff"]["telefone"]["new"], "456");
    }
}
