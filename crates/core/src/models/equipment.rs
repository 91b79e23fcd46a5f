//! Equipment records.

use serde::{Deserialize, Serialize};

use crate::types::EquipmentId;

/// A serviceable piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "marca")]
    pub brand: String,
    /// Serial number.
    pub sn: String,
}

/// Input for creating equipment. The store assigns the ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEquipment {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "marca")]
    pub brand: String,
    pub sn: String,
}

impl NewEquipment {
    /// Materialize the record under a store-assigned ID.
    #[must_use]
    pub fn into_equipment(self, id: EquipmentId) -> Equipment {
        Equipment {
            id,
            name: self.name,
            model: self.model,
            brand: self.brand,
            sn: self.sn,
        }
    }
}

/// Partial update for equipment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EquipmentPatch {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "modelo", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "marca", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sn: Option<String>,
}

impl EquipmentPatch {
    /// Merge the patch into an existing record.
    pub fn apply(&self, equipment: &mut Equipment) {
        if let Some(v) = &self.name {
            equipment.name = v.clone();
        }
        if let Some(v) = &self.model {
            equipment.model = v.clone();
        }
        if let Some(v) = &self.brand {
            equipment.brand = v.clone();
        }
        if let Some(v) = &self.sn {
            equipment.sn = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_wire_field_names() {
        let equipment = NewEquipment {
            name: "Split 12000".to_string(),
            model: "X-12".to_string(),
            brand: "Consul".to_string(),
            sn: "SN-001".to_string(),
        }
        .into_equipment(EquipmentId::from_seq(1));

        let json = serde_json::to_value(equipment).expect("serialize");
        assert_eq!(json["id"], "equipamento-1");
        assert_eq!(json["nome"], "Split 12000");
        assert_eq!(json["modelo"], "X-12");
        assert_eq!(json["marca"], "Consul");
        assert_eq!(json["sn"], "SN-001");
    }
}
