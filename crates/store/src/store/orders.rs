//! Service order operations.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use ordem_core::{
    AuditAction, AuditEntityKind, AuditLogId, ClientId, DiffMap, EquipmentId, NewServiceOrder,
    OrderId, OrderPatch, ServiceOrder, ServiceStatus,
};

use crate::diff::patch_diff;
use crate::error::StoreError;

use super::DataStore;

/// Filter for [`DataStore::list_orders`]. All criteria are optional and
/// combine with AND: status and the foreign keys match exactly, `search` is
/// a case-insensitive substring over the order ID, the reported issue and
/// the findings.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<ServiceStatus>,
    pub client_id: Option<ClientId>,
    pub equipment_id: Option<EquipmentId>,
    pub search: Option<String>,
}

impl DataStore {
    /// List service orders matching the filter, sorted by order date,
    /// newest first.
    #[must_use]
    pub fn list_orders(&self, filter: &OrderFilter) -> Vec<ServiceOrder> {
        let needle = filter
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut orders: Vec<ServiceOrder> = self
            .aggregate()
            .orders
            .iter()
            .filter(|o| filter.status.is_none_or(|s| o.status == s))
            .filter(|o| filter.client_id.as_ref().is_none_or(|id| &o.client_id == id))
            .filter(|o| {
                filter
                    .equipment_id
                    .as_ref()
                    .is_none_or(|id| &o.equipment_id == id)
            })
            .filter(|o| {
                needle.as_deref().is_none_or(|q| {
                    o.id.as_str().to_lowercase().contains(q)
                        || o.reported_issue.to_lowercase().contains(q)
                        || o.findings.to_lowercase().contains(q)
                })
            })
            .cloned()
            .collect();

        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        orders
    }

    /// Fetch one service order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID has no match.
    pub fn get_order(&self, id: &OrderId) -> Result<ServiceOrder, StoreError> {
        self.aggregate()
            .orders
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("service order {id}")))
    }

    /// Create a service order under the next sequential ID
    /// (`OS-<year>-<seq>`, year of creation).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if the referenced client or
    /// equipment does not exist, or if any monetary/odometer field is
    /// negative.
    pub fn create_order(&mut self, new: NewServiceOrder) -> Result<ServiceOrder, StoreError> {
        self.check_order_references(&new.client_id, &new.equipment_id)?;
        validate_new_amounts(&new)?;

        self.aggregate_mut().counters.orders += 1;
        let year = Utc::now().date_naive().year();
        let id = OrderId::from_parts(year, self.aggregate().counters.orders);

        let order = new.into_order(id.clone());
        self.aggregate_mut().orders.push(order);
        let entry_id = self.record_audit(
            AuditAction::Create,
            AuditEntityKind::OrdemServico,
            id.as_str(),
            DiffMap::new(),
            "Ordem de serviço criada",
        );
        self.link_audit_entry(&id, entry_id);

        debug!(%id, "service order created");
        self.persist_and_notify();
        self.get_order(&id)
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID has no match, or
    /// [`StoreError::Validation`] if a patched foreign key does not resolve
    /// or a patched amount is negative.
    pub fn update_order(&mut self, id: &OrderId, patch: &OrderPatch) -> Result<ServiceOrder, StoreError> {
        let old = self.get_order(id)?;
        let mut updated = old.clone();
        patch.apply(&mut updated);

        if patch.client_id.is_some() || patch.equipment_id.is_some() {
            self.check_order_references(&updated.client_id, &updated.equipment_id)?;
        }
        validate_amounts(&updated)?;

        let diff = patch_diff(&old, &updated, patch)?;

        if let Some(entry) = self.aggregate_mut().orders.iter_mut().find(|o| &o.id == id) {
            *entry = updated;
        }
        let entry_id = self.record_audit(
            AuditAction::Update,
            AuditEntityKind::OrdemServico,
            id.as_str(),
            diff,
            "Ordem de serviço atualizada",
        );
        self.link_audit_entry(id, entry_id);

        debug!(%id, "service order updated");
        self.persist_and_notify();
        self.get_order(id)
    }

    /// Delete a service order. Orders are never referenced by other
    /// entities, so there is no dependency guard; attachments and audit
    /// entries linked to the order stay in their global collections.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID has no match.
    pub fn delete_order(&mut self, id: &OrderId) -> Result<(), StoreError> {
        let order = self.get_order(id)?;

        self.aggregate_mut().orders.retain(|o| &o.id != id);
        let comment = format!("Ordem de serviço {} excluída", order.id);
        self.record_audit(
            AuditAction::Delete,
            AuditEntityKind::OrdemServico,
            id.as_str(),
            DiffMap::new(),
            &comment,
        );
        debug!(%id, "service order deleted");
        self.persist_and_notify();
        Ok(())
    }

    fn check_order_references(
        &self,
        client_id: &ClientId,
        equipment_id: &EquipmentId,
    ) -> Result<(), StoreError> {
        if !self.aggregate().clients.iter().any(|c| &c.id == client_id) {
            return Err(StoreError::Validation(format!(
                "referenced client {client_id} does not exist"
            )));
        }
        if !self
            .aggregate()
            .equipment
            .iter()
            .any(|e| &e.id == equipment_id)
        {
            return Err(StoreError::Validation(format!(
                "referenced equipment {equipment_id} does not exist"
            )));
        }
        Ok(())
    }

    fn link_audit_entry(&mut self, order_id: &OrderId, entry_id: AuditLogId) {
        if let Some(order) = self
            .aggregate_mut()
            .orders
            .iter_mut()
            .find(|o| &o.id == order_id)
        {
            order.audit_log.push(entry_id);
        }
    }
}

fn ensure_non_negative(amounts: [(&str, Decimal); 6]) -> Result<(), StoreError> {
    for (field, amount) in amounts {
        if amount < Decimal::ZERO {
            return Err(StoreError::Validation(format!(
                "{field} must not be negative (got {amount})"
            )));
        }
    }
    Ok(())
}

fn validate_new_amounts(new: &NewServiceOrder) -> Result<(), StoreError> {
    ensure_non_negative([
        ("valor_visita", new.visit_fee),
        ("mao_de_obra", new.labor),
        ("valor_material", new.material_cost),
        ("unit_km", new.km_rate),
        ("km_inicial", new.odometer_start),
        ("km_final", new.odometer_end),
    ])
}

fn validate_amounts(order: &ServiceOrder) -> Result<(), StoreError> {
    ensure_non_negative([
        ("valor_visita", order.visit_fee),
        ("mao_de_obra", order.labor),
        ("valor_material", order.material_cost),
        ("unit_km", order.km_rate),
        ("km_inicial", order.odometer_start),
        ("km_final", order.odometer_end),
    ])
}
