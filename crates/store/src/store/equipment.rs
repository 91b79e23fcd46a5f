//! Equipment operations.

use tracing::debug;

use ordem_core::{
    AuditAction, AuditEntityKind, DiffMap, Equipment, EquipmentId, EquipmentPatch, NewEquipment,
};

use crate::diff::patch_diff;
use crate::error::StoreError;

use super::DataStore;

impl DataStore {
    /// List equipment, optionally filtered by a case-insensitive substring
    /// over name, model, brand and serial number. Sorted by name,
    /// case-insensitive ascending.
    #[must_use]
    pub fn list_equipment(&self, query: Option<&str>) -> Vec<Equipment> {
        let mut equipment: Vec<Equipment> = match query.filter(|q| !q.is_empty()) {
            Some(q) => {
                let needle = q.to_lowercase();
                self.aggregate()
                    .equipment
                    .iter()
                    .filter(|e| {
                        e.name.to_lowercase().contains(&needle)
                            || e.model.to_lowercase().contains(&needle)
                            || e.brand.to_lowercase().contains(&needle)
                            || e.sn.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect()
            }
            None => self.aggregate().equipment.clone(),
        };

        equipment.sort_by_key(|e| e.name.to_lowercase());
        equipment
    }

    /// Fetch one equipment record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID has no match.
    pub fn get_equipment(&self, id: &EquipmentId) -> Result<Equipment, StoreError> {
        self.aggregate()
            .equipment
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("equipment {id}")))
    }

    /// Create an equipment record under the next sequential ID.
    pub fn create_equipment(&mut self, new: NewEquipment) -> Equipment {
        self.aggregate_mut().counters.equipment += 1;
        let id = EquipmentId::from_seq(self.aggregate().counters.equipment);

        let equipment = new.into_equipment(id.clone());
        self.aggregate_mut().equipment.push(equipment.clone());
        self.record_audit(
            AuditAction::Create,
            AuditEntityKind::Equipamento,
            id.as_str(),
            DiffMap::new(),
            "Equipamento criado",
        );
        debug!(%id, "equipment created");
        self.persist_and_notify();
        equipment
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID has no match.
    pub fn update_equipment(
        &mut self,
        id: &EquipmentId,
        patch: &EquipmentPatch,
    ) -> Result<Equipment, StoreError> {
        let old = self.get_equipment(id)?;
        let mut updated = old.clone();
        patch.apply(&mut updated);

        let diff = patch_diff(&old, &updated, patch)?;

        if let Some(entry) = self
            .aggregate_mut()
            .equipment
            .iter_mut()
            .find(|e| &e.id == id)
        {
            *entry = updated.clone();
        }
        self.record_audit(
            AuditAction::Update,
            AuditEntityKind::Equipamento,
            id.as_str(),
            diff,
            "Equipamento atualizado",
        );
        debug!(%id, "equipment updated");
        self.persist_and_notify();
        Ok(updated)
    }

    /// Delete an equipment record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID has no match, or
    /// [`StoreError::Conflict`] if any service order still references it.
    pub fn delete_equipment(&mut self, id: &EquipmentId) -> Result<(), StoreError> {
        let equipment = self.get_equipment(id)?;

        if self.aggregate().orders.iter().any(|o| &o.equipment_id == id) {
            return Err(StoreError::Conflict(format!(
                "equipment {id} still has service orders attached"
            )));
        }

        self.aggregate_mut().equipment.retain(|e| &e.id != id);
        let comment = format!("Equipamento {} excluído", equipment.name);
        self.record_audit(
            AuditAction::Delete,
            AuditEntityKind::Equipamento,
            id.as_str(),
            DiffMap::new(),
            &comment,
        );
        debug!(%id, "equipment deleted");
        self.persist_and_notify();
        Ok(())
    }
}
