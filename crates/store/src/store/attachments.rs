//! Attachment operations.
//!
//! Attachments are stored inline (base64) in their own collection and
//! referenced from an owning entity. For service orders the store also
//! maintains the order-side `attachments` ID list, which the printable
//! document renders in upload order. Attachments are not an audited entity
//! kind, so these operations persist and notify without audit entries.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use tracing::debug;

use ordem_core::{Attachment, AttachmentId, AttachmentOwner};

use crate::error::StoreError;

use super::DataStore;

impl DataStore {
    /// Store a new attachment for an existing entity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if the owning entity does not
    /// exist.
    pub fn add_attachment(
        &mut self,
        owner: AttachmentOwner,
        filename: &str,
        mime: &str,
        bytes: &[u8],
    ) -> Result<Attachment, StoreError> {
        self.check_owner_exists(&owner)?;

        self.aggregate_mut().counters.attachments += 1;
        let id = AttachmentId::from_seq(self.aggregate().counters.attachments);

        let attachment = Attachment {
            id: id.clone(),
            filename: filename.to_string(),
            mime: mime.to_string(),
            payload: BASE64.encode(bytes),
            size: bytes.len() as u64,
            uploaded_at: Utc::now(),
            owner: owner.clone(),
        };
        self.aggregate_mut().attachments.push(attachment.clone());

        if let AttachmentOwner::Order(order_id) = &owner
            && let Some(order) = self
                .aggregate_mut()
                .orders
                .iter_mut()
                .find(|o| &o.id == order_id)
        {
            order.attachments.push(id.clone());
        }

        debug!(%id, owner = %owner, size = bytes.len(), "attachment stored");
        self.persist_and_notify();
        Ok(attachment)
    }

    /// All attachments belonging to an entity, in upload order.
    #[must_use]
    pub fn attachments_for(&self, owner: &AttachmentOwner) -> Vec<Attachment> {
        self.aggregate()
            .attachments
            .iter()
            .filter(|a| &a.owner == owner)
            .cloned()
            .collect()
    }

    /// Remove an attachment, unlinking it from an owning order if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID has no match.
    pub fn remove_attachment(&mut self, id: &AttachmentId) -> Result<(), StoreError> {
        let owner = self
            .aggregate()
            .attachments
            .iter()
            .find(|a| &a.id == id)
            .map(|a| a.owner.clone())
            .ok_or_else(|| StoreError::NotFound(format!("attachment {id}")))?;

        self.aggregate_mut().attachments.retain(|a| &a.id != id);

        if let AttachmentOwner::Order(order_id) = &owner
            && let Some(order) = self
                .aggregate_mut()
                .orders
                .iter_mut()
                .find(|o| &o.id == order_id)
        {
            order.attachments.retain(|a| a != id);
        }

        debug!(%id, "attachment removed");
        self.persist_and_notify();
        Ok(())
    }

    fn check_owner_exists(&self, owner: &AttachmentOwner) -> Result<(), StoreError> {
        let exists = match owner {
            AttachmentOwner::Order(id) => self.aggregate().orders.iter().any(|o| &o.id == id),
            AttachmentOwner::Client(id) => self.aggregate().clients.iter().any(|c| &c.id == id),
            AttachmentOwner::Equipment(id) => {
                self.aggregate().equipment.iter().any(|e| &e.id == id)
            }
        };
        if exists {
            Ok(())
        } else {
            Err(StoreError::Validation(format!(
                "attachment owner {owner} does not exist"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordem_core::{ClientId, OrderId};

    fn first_order_id(store: &DataStore) -> OrderId {
        store.snapshot().orders.first().expect("seed order").id.clone()
    }

    #[test]
    fn test_add_attachment_encodes_and_links() {
        let mut store = DataStore::in_memory();
        let order_id = first_order_id(&store);

        let attachment = store
            .add_attachment(
                AttachmentOwner::Order(order_id.clone()),
                "foto.jpg",
                "image/jpeg",
                b"hello",
            )
            .expect("add");

        assert_eq!(attachment.id.as_str(), "anexo-1");
        assert_eq!(attachment.payload, "aGVsbG8=");
        assert_eq!(attachment.size, 5);

        let order = store.get_order(&order_id).expect("order");
        assert_eq!(order.attachments, vec![attachment.id]);
    }

    #[test]
    fn test_add_attachment_rejects_missing_owner() {
        let mut store = DataStore::in_memory();
        let result = store.add_attachment(
            AttachmentOwner::Client(ClientId::from_seq(77)),
            "doc.pdf",
            "application/pdf",
            b"x",
        );
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(store.snapshot().attachments.is_empty());
    }

    #[test]
    fn test_attachments_for_filters_by_owner() {
        let mut store = DataStore::in_memory();
        let order_id = first_order_id(&store);
        let client_owner = AttachmentOwner::Client(ClientId::from_seq(1));

        store
            .add_attachment(AttachmentOwner::Order(order_id.clone()), "a.jpg", "image/jpeg", b"a")
            .expect("add");
        store
            .add_attachment(client_owner.clone(), "b.pdf", "application/pdf", b"b")
            .expect("add");

        assert_eq!(store.attachments_for(&client_owner).len(), 1);
        assert_eq!(
            store
                .attachments_for(&AttachmentOwner::Order(order_id))
                .len(),
            1
        );
    }

    #[test]
    fn test_remove_attachment_unlinks_order() {
        let mut store = DataStore::in_memory();
        let order_id = first_order_id(&store);

        let attachment = store
            .add_attachment(AttachmentOwner::Order(order_id.clone()), "a.jpg", "image/jpeg", b"a")
            .expect("add");
        store.remove_attachment(&attachment.id).expect("remove");

        assert!(store.snapshot().attachments.is_empty());
        assert!(store.get_order(&order_id).expect("order").attachments.is_empty());
    }

    #[test]
    fn test_remove_missing_attachment() {
        let mut store = DataStore::in_memory();
        let result = store.remove_attachment(&AttachmentId::from_seq(9));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
