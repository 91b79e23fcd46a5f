//! Company singleton operations.

use tracing::debug;

use ordem_core::{AuditAction, AuditEntityKind, Company, CompanyId, CompanyInput, DiffMap};

use crate::diff::full_diff;
use crate::error::StoreError;

use super::DataStore;

impl DataStore {
    /// Fetch the company profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the profile was never set.
    pub fn company(&self) -> Result<Company, StoreError> {
        self.aggregate()
            .company
            .clone()
            .ok_or_else(|| StoreError::NotFound("company profile not configured".to_string()))
    }

    /// Create or replace the company profile under the fixed singleton ID.
    ///
    /// Logs a `create` audit entry (empty diff) when the profile did not
    /// exist, an `update` entry with a full field diff when it did.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if diff serialization fails.
    pub fn set_company(&mut self, input: CompanyInput) -> Result<Company, StoreError> {
        let id = self
            .aggregate()
            .company
            .as_ref()
            .map_or_else(CompanyId::default, |c| c.id.clone());
        let updated = input.into_company(id.clone());

        match self.aggregate().company.clone() {
            Some(old) => {
                let diff = full_diff(&old, &updated)?;
                self.aggregate_mut().company = Some(updated.clone());
                self.record_audit(
                    AuditAction::Update,
                    AuditEntityKind::Empresa,
                    id.as_str(),
                    diff,
                    "Dados da empresa atualizados",
                );
                debug!(%id, "company profile updated");
            }
            None => {
                self.aggregate_mut().company = Some(updated.clone());
                self.record_audit(
                    AuditAction::Create,
                    AuditEntityKind::Empresa,
                    id.as_str(),
                    DiffMap::new(),
                    "Dados da empresa criados",
                );
                debug!(%id, "company profile created");
            }
        }

        self.persist_and_notify();
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, phone: &str) -> CompanyInput {
        CompanyInput {
            name: name.to_string(),
            phone: phone.to_string(),
            ..CompanyInput::default()
        }
    }

    #[test]
    fn test_company_not_found_when_unset() {
        let mut store = DataStore::in_memory();
        store
            .import_snapshot(r#"{"ordens_servico":[],"clientes":[],"equipamentos":[]}"#)
            .expect("import");
        assert!(matches!(store.company(), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_set_company_replace_logs_update_with_diff() {
        let mut store = DataStore::in_memory();
        // Seed already configured the profile
        store
            .set_company(input("Nova Razão", "(41) 3000-0000"))
            .expect("set");

        let last = store.snapshot().audit_log.pop().expect("audit entry");
        assert_eq!(last.action, AuditAction::Update);
        assert_eq!(last.entity, AuditEntityKind::Empresa);
        assert!(last.diff.contains_key("nome"));
        assert!(last.diff.contains_key("telefone"));
    }

    #[test]
    fn test_set_company_create_logs_create() {
        let mut store = DataStore::in_memory();
        store
            .import_snapshot(r#"{"ordens_servico":[],"clientes":[],"equipamentos":[]}"#)
            .expect("import");

        let company = store.set_company(input("Empresa Nova", "")).expect("set");
        assert_eq!(company.id.as_str(), "empresa-1");

        let last = store.snapshot().audit_log.pop().expect("audit entry");
        assert_eq!(last.action, AuditAction::Create);
        assert!(last.diff.is_empty());
    }

    #[test]
    fn test_set_company_keeps_fixed_id() {
        let mut store = DataStore::in_memory();
        let company = store.set_company(input("Qualquer", "")).expect("set");
        assert_eq!(company.id, CompanyId::default());
        assert_eq!(store.company().expect("company").id, CompanyId::default());
    }
}
