//! The `DataStore`: sole owner of the aggregate, sole writer to the slot.

mod attachments;
mod clients;
mod company;
mod equipment;
mod orders;

use std::panic::{AssertUnwindSafe, catch_unwind};

use chrono::Utc;
use tracing::{debug, error, info, warn};

use ordem_core::{
    AuditAction, AuditEntityKind, AuditLogEntry, AuditLogId, DiffMap, Settings, Snapshot,
};

use crate::envelope::Envelope;
use crate::error::StoreError;
use crate::seed::seed_snapshot;
use crate::slot::{MemorySlot, PersistenceSlot};

pub use orders::OrderFilter;

/// Handle identifying a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Collection counts reported by a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub orders: usize,
    pub clients: usize,
    pub equipment: usize,
}

type Observer = Box<dyn Fn() + Send + Sync>;

/// The local data store.
///
/// Constructed once per process over an injected [`PersistenceSlot`] and
/// passed by reference to callers - there is no global instance, so tests
/// can run any number of isolated stores.
///
/// All operations are synchronous and run to completion; mutating
/// operations take `&mut self`, which makes the single-writer discipline a
/// compile-time property.
pub struct DataStore {
    snapshot: Snapshot,
    slot: Box<dyn PersistenceSlot>,
    observers: Vec<(SubscriberId, Observer)>,
    next_observer: u64,
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore")
            .field("orders", &self.snapshot.orders.len())
            .field("clients", &self.snapshot.clients.len())
            .field("equipment", &self.snapshot.equipment.len())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl DataStore {
    /// Open the store over a persistence slot.
    ///
    /// Restores the aggregate from the slot when it holds a readable
    /// envelope of the expected format version; otherwise materializes the
    /// seed dataset and persists it. Either way the aggregate is populated
    /// on return - startup never fails on bad slot contents.
    #[must_use]
    pub fn open(slot: Box<dyn PersistenceSlot>) -> Self {
        let restored = match slot.load() {
            Ok(Some(contents)) => Envelope::parse(&contents),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "slot unreadable, starting from seed");
                None
            }
        };

        match restored {
            Some(mut snapshot) => {
                // Legacy payloads carry no counters; derive them from the
                // IDs actually present.
                snapshot.reconcile_counters();
                debug!(
                    orders = snapshot.orders.len(),
                    clients = snapshot.clients.len(),
                    equipment = snapshot.equipment.len(),
                    "aggregate restored from slot"
                );
                Self {
                    snapshot,
                    slot,
                    observers: Vec::new(),
                    next_observer: 0,
                }
            }
            None => {
                info!("materializing seed dataset");
                let mut store = Self {
                    snapshot: seed_snapshot(Utc::now()),
                    slot,
                    observers: Vec::new(),
                    next_observer: 0,
                };
                store.persist_and_notify();
                store
            }
        }
    }

    /// Open a store over a fresh in-memory slot. Mostly useful in tests and
    /// examples.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemorySlot::new()))
    }

    /// Deep copy of the whole aggregate. The copy shares nothing with the
    /// store's internal state; mutating it has no effect on the store.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.snapshot.settings.clone()
    }

    /// Replace the settings. Persists and notifies; settings changes are
    /// not audited (settings is not an audited entity kind).
    pub fn update_settings(&mut self, settings: Settings) {
        self.snapshot.settings = settings;
        self.persist_and_notify();
    }

    /// Serialize the full aggregate to transportable pretty-printed JSON.
    ///
    /// The gist access token is blanked in the output: exports exist to be
    /// moved off the machine (including to the gist itself), and the token
    /// must not travel with them. Everything else is exported verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if serialization fails.
    pub fn export_snapshot(&self) -> Result<String, StoreError> {
        let mut snapshot = self.snapshot.clone();
        if let Some(gist) = &mut snapshot.settings.gist {
            gist.token.clear();
        }
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| StoreError::Persistence(e.to_string()))
    }

    /// Replace the whole aggregate with a parsed export.
    ///
    /// Validation is structural: the three core collections must be present
    /// as arrays and the payload must deserialize as a snapshot. There is
    /// no per-record validation and no merge - the aggregate is replaced
    /// wholesale. On any validation failure the existing aggregate is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] on malformed payloads.
    pub fn import_snapshot(&mut self, text: &str) -> Result<ImportStats, StoreError> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| StoreError::Validation(format!("import payload is not valid JSON: {e}")))?;

        for collection in ["ordens_servico", "clientes", "equipamentos"] {
            if !value
                .get(collection)
                .is_some_and(serde_json::Value::is_array)
            {
                return Err(StoreError::Validation(format!(
                    "import payload is missing the `{collection}` collection"
                )));
            }
        }

        let mut snapshot: Snapshot = serde_json::from_value(value).map_err(|e| {
            StoreError::Validation(format!("import payload does not match the snapshot shape: {e}"))
        })?;
        snapshot.reconcile_counters();

        let stats = ImportStats {
            orders: snapshot.orders.len(),
            clients: snapshot.clients.len(),
            equipment: snapshot.equipment.len(),
        };

        self.snapshot = snapshot;
        info!(
            orders = stats.orders,
            clients = stats.clients,
            equipment = stats.equipment,
            "snapshot imported"
        );
        self.persist_and_notify();
        Ok(stats)
    }

    /// Discard the aggregate and start over from the seed dataset.
    pub fn reset_to_seed(&mut self) {
        self.snapshot = seed_snapshot(Utc::now());
        info!("aggregate reset to seed dataset");
        self.persist_and_notify();
    }

    /// Register an observer called after every successful persist.
    ///
    /// Observers run synchronously in registration order. A panicking
    /// observer is logged and skipped; it never affects other observers or
    /// the mutating caller.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriberId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Unknown IDs are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.observers.retain(|(observer_id, _)| *observer_id != id);
    }

    // ------------------------------------------------------------------
    // Internals shared by the per-entity operation modules
    // ------------------------------------------------------------------

    pub(crate) fn aggregate(&self) -> &Snapshot {
        &self.snapshot
    }

    pub(crate) fn aggregate_mut(&mut self) -> &mut Snapshot {
        &mut self.snapshot
    }

    /// Append an audit entry. The caller persists afterwards.
    pub(crate) fn record_audit(
        &mut self,
        action: AuditAction,
        entity: AuditEntityKind,
        entity_id: &str,
        diff: DiffMap,
        comment: &str,
    ) -> AuditLogId {
        let id = AuditLogId::generate();
        self.snapshot.audit_log.push(AuditLogEntry {
            id: id.clone(),
            timestamp: Utc::now(),
            action,
            entity,
            entity_id: entity_id.to_string(),
            diff,
            comment: comment.to_string(),
        });
        id
    }

    /// Write the aggregate to the slot, then notify observers.
    ///
    /// A failed write is logged and swallowed: the in-memory aggregate
    /// stays authoritative and observers are not notified for this
    /// mutation. The next successful persist writes the current state.
    pub(crate) fn persist_and_notify(&mut self) {
        let envelope = Envelope::wrap(self.snapshot.clone());
        let contents = match serde_json::to_string(&envelope) {
            Ok(contents) => contents,
            Err(e) => {
                error!(error = %e, "aggregate serialization failed, slot left stale");
                return;
            }
        };

        if let Err(e) = self.slot.save(&contents) {
            error!(error = %e, "slot write failed, aggregate kept in memory only");
            return;
        }

        self.notify();
    }

    fn notify(&self) {
        for (id, observer) in &self.observers {
            if catch_unwind(AssertUnwindSafe(|| observer())).is_err() {
                error!(subscriber = id.0, "observer panicked during change notification");
            }
        }
    }
}
