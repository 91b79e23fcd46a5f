//! File attachments linked to domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AttachmentId, ClientId, EquipmentId, OrderId};

/// The entity an attachment belongs to.
///
/// Serialized as `{"entity": "<kind>", "id": "<entity id>"}` to match the
/// persisted wire format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "OwnerWire", try_from = "OwnerWire")]
pub enum AttachmentOwner {
    Order(OrderId),
    Client(ClientId),
    Equipment(EquipmentId),
}

impl AttachmentOwner {
    /// The owning entity's raw ID string.
    #[must_use]
    pub fn id_str(&self) -> &str {
        match self {
            Self::Order(id) => id.as_str(),
            Self::Client(id) => id.as_str(),
            Self::Equipment(id) => id.as_str(),
        }
    }
}

impl std::fmt::Display for AttachmentOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Order(id) => write!(f, "ordem_servico {id}"),
            Self::Client(id) => write!(f, "cliente {id}"),
            Self::Equipment(id) => write!(f, "equipamento {id}"),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct OwnerWire {
    entity: String,
    id: String,
}

impl From<AttachmentOwner> for OwnerWire {
    fn from(owner: AttachmentOwner) -> Self {
        let (entity, id) = match owner {
            AttachmentOwner::Order(id) => ("ordem_servico", id.as_str().to_string()),
            AttachmentOwner::Client(id) => ("cliente", id.as_str().to_string()),
            AttachmentOwner::Equipment(id) => ("equipamento", id.as_str().to_string()),
        };
        Self {
            entity: entity.to_string(),
            id,
        }
    }
}

impl TryFrom<OwnerWire> for AttachmentOwner {
    type Error = String;

    fn try_from(wire: OwnerWire) -> Result<Self, Self::Error> {
        match wire.entity.as_str() {
            "ordem_servico" => Ok(Self::Order(OrderId::new(wire.id))),
            "cliente" => Ok(Self::Client(ClientId::new(wire.id))),
            "equipamento" => Ok(Self::Equipment(EquipmentId::new(wire.id))),
            other => Err(format!("invalid attachment owner entity: {other}")),
        }
    }
}

/// An uploaded file, stored inline as base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub filename: String,
    /// MIME type as reported at upload time.
    pub mime: String,
    /// Base64-encoded payload.
    #[serde(rename = "base64")]
    pub payload: String,
    /// Decoded size in bytes.
    pub size: u64,
    #[serde(rename = "uploaded_at")]
    pub uploaded_at: DateTime<Utc>,
    #[serde(rename = "linked_to")]
    pub owner: AttachmentOwner,
}
