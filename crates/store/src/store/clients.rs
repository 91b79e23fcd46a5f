//! Client operations.

use tracing::debug;

use ordem_core::{AuditAction, AuditEntityKind, Client, ClientId, ClientPatch, DiffMap, NewClient};

use crate::diff::patch_diff;
use crate::error::StoreError;

use super::DataStore;

impl DataStore {
    /// List clients, optionally filtered by a case-insensitive substring
    /// over trade name, legal name and email (tax IDs match verbatim).
    /// Sorted by trade name, case-insensitive ascending.
    #[must_use]
    pub fn list_clients(&self, query: Option<&str>) -> Vec<Client> {
        let mut clients: Vec<Client> = match query.filter(|q| !q.is_empty()) {
            Some(q) => {
                let needle = q.to_lowercase();
                self.aggregate()
                    .clients
                    .iter()
                    .filter(|c| {
                        c.trade_name.to_lowercase().contains(&needle)
                            || c.legal_name.to_lowercase().contains(&needle)
                            || c.email.to_lowercase().contains(&needle)
                            || c.cpf.contains(q)
                            || c.cnpj.contains(q)
                    })
                    .cloned()
                    .collect()
            }
            None => self.aggregate().clients.clone(),
        };

        clients.sort_by_key(|c| c.trade_name.to_lowercase());
        clients
    }

    /// Fetch one client.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID has no match.
    pub fn get_client(&self, id: &ClientId) -> Result<Client, StoreError> {
        self.aggregate()
            .clients
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("client {id}")))
    }

    /// Create a client under the next sequential ID.
    pub fn create_client(&mut self, new: NewClient) -> Client {
        self.aggregate_mut().counters.clients += 1;
        let id = ClientId::from_seq(self.aggregate().counters.clients);

        let client = new.into_client(id.clone());
        self.aggregate_mut().clients.push(client.clone());
        self.record_audit(
            AuditAction::Create,
            AuditEntityKind::Cliente,
            id.as_str(),
            DiffMap::new(),
            "Cliente criado",
        );
        debug!(%id, "client created");
        self.persist_and_notify();
        client
    }

    /// Apply a partial update. The ID is never overwritten; an empty patch
    /// still appends an audit entry (with an empty diff).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID has no match.
    pub fn update_client(&mut self, id: &ClientId, patch: &ClientPatch) -> Result<Client, StoreError> {
        let old = self.get_client(id)?;
        let mut updated = old.clone();
        patch.apply(&mut updated);

        let diff = patch_diff(&old, &updated, patch)?;

        if let Some(entry) = self.aggregate_mut().clients.iter_mut().find(|c| &c.id == id) {
            *entry = updated.clone();
        }
        self.record_audit(
            AuditAction::Update,
            AuditEntityKind::Cliente,
            id.as_str(),
            diff,
            "Cliente atualizado",
        );
        debug!(%id, "client updated");
        self.persist_and_notify();
        Ok(updated)
    }

    /// Delete a client.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID has no match, or
    /// [`StoreError::Conflict`] if any service order still references it -
    /// deletion is rejected, never cascaded.
    pub fn delete_client(&mut self, id: &ClientId) -> Result<(), StoreError> {
        let client = self.get_client(id)?;

        if self.aggregate().orders.iter().any(|o| &o.client_id == id) {
            return Err(StoreError::Conflict(format!(
                "client {id} still has service orders attached"
            )));
        }

        self.aggregate_mut().clients.retain(|c| &c.id != id);
        let comment = format!("Cliente {} excluído", client.trade_name);
        self.record_audit(
            AuditAction::Delete,
            AuditEntityKind::Cliente,
            id.as_str(),
            DiffMap::new(),
            &comment,
        );
        debug!(%id, "client deleted");
        self.persist_and_notify();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordem_core::AuditAction;

    fn new_client(name: &str) -> NewClient {
        NewClient {
            trade_name: name.to_string(),
            phone: "123".to_string(),
            ..NewClient::default()
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = DataStore::in_memory();
        // Seed already holds cliente-1 and cliente-2
        let a = store.create_client(new_client("Primeiro"));
        let b = store.create_client(new_client("Segundo"));
        assert_eq!(a.id.as_str(), "cliente-3");
        assert_eq!(b.id.as_str(), "cliente-4");
    }

    #[test]
    fn test_create_records_audit_entry() {
        let mut store = DataStore::in_memory();
        let client = store.create_client(new_client("Ana"));

        let entries: Vec<_> = store
            .snapshot()
            .audit_log
            .into_iter()
            .filter(|e| e.entity_id == client.id.as_str())
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, AuditAction::Create);
        assert!(entries[0].diff.is_empty());
    }

    #[test]
    fn test_get_returns_created_fields() {
        let mut store = DataStore::in_memory();
        let created = store.create_client(new_client("Ana"));
        let fetched = store.get_client(&created.id).expect("get");
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_deleted_id_is_never_reused() {
        let mut store = DataStore::in_memory();
        let a = store.create_client(new_client("Descartado"));
        store.delete_client(&a.id).expect("delete");

        let b = store.create_client(new_client("Novo"));
        assert_ne!(a.id, b.id);
        assert_eq!(b.id.as_str(), "cliente-4");
    }

    #[test]
    fn test_update_empty_patch_keeps_fields_and_logs_empty_diff() {
        let mut store = DataStore::in_memory();
        let created = store.create_client(new_client("Ana"));

        let updated = store
            .update_client(&created.id, &ClientPatch::default())
            .expect("update");
        assert_eq!(updated, created);

        let last = store.snapshot().audit_log.pop().expect("audit entry");
        assert_eq!(last.action, AuditAction::Update);
        assert!(last.diff.is_empty());
    }

    #[test]
    fn test_update_diff_strict_inequality() {
        let mut store = DataStore::in_memory();
        let created = store.create_client(new_client("Ana"));

        let patch = ClientPatch {
            phone: Some("999".to_string()),
            trade_name: Some("Ana".to_string()),
            ..ClientPatch::default()
        };
        store.update_client(&created.id, &patch).expect("update");

        let last = store.snapshot().audit_log.pop().expect("audit entry");
        assert_eq!(last.diff.len(), 1);
        assert!(last.diff.contains_key("telefone"));
    }

    #[test]
    fn test_update_missing_client() {
        let mut store = DataStore::in_memory();
        let result = store.update_client(&ClientId::from_seq(99), &ClientPatch::default());
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_blocked_by_order_reference() {
        let mut store = DataStore::in_memory();
        // Seed cliente-1 is referenced by seed orders
        let result = store.delete_client(&ClientId::from_seq(1));
        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert!(store.get_client(&ClientId::from_seq(1)).is_ok());
    }

    #[test]
    fn test_delete_unreferenced_client() {
        let mut store = DataStore::in_memory();
        let created = store.create_client(new_client("Sem Ordens"));
        store.delete_client(&created.id).expect("delete");
        assert!(matches!(
            store.get_client(&created.id),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_clients_sorted_case_insensitive() {
        let mut store = DataStore::in_memory();
        store.create_client(new_client("zebra"));
        store.create_client(new_client("Abelha"));

        let names: Vec<_> = store
            .list_clients(None)
            .into_iter()
            .map(|c| c.trade_name)
            .collect();
        assert_eq!(names, ["Abelha", "Helena Prado", "Mercado Bom Preço", "zebra"]);
    }

    #[test]
    fn test_list_clients_substring_filter() {
        let store = DataStore::in_memory();
        let hits = store.list_clients(Some("helena"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].trade_name, "Helena Prado");

        let by_cnpj = store.list_clients(Some("45.678.901"));
        assert_eq!(by_cnpj.len(), 1);
        assert_eq!(by_cnpj[0].trade_name, "Mercado Bom Preço");
    }
}
