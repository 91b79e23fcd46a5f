//! The root aggregate and its ID counters.

use serde::{Deserialize, Serialize};

use crate::models::{
    Attachment, AuditLogEntry, Client, Company, Equipment, ServiceOrder, Settings,
};

/// Monotonic per-kind ID counters, persisted with the aggregate.
///
/// Counters only move forward; deleting a record never frees its sequence
/// number. Snapshots written before counters existed (or produced by foreign
/// tools) default to zero and are reconciled against the IDs actually
/// present - see [`Snapshot::reconcile_counters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounters {
    #[serde(rename = "clientes")]
    pub clients: u64,
    #[serde(rename = "equipamentos")]
    pub equipment: u64,
    #[serde(rename = "ordens_servico")]
    pub orders: u64,
    #[serde(rename = "anexos")]
    pub attachments: u64,
}

/// The full in-memory aggregate: every domain collection managed as one
/// unit. The store owns exactly one of these for the process lifetime; the
/// persistence slot holds the serialized copy that survives restarts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "ordens_servico")]
    pub orders: Vec<ServiceOrder>,
    #[serde(rename = "clientes")]
    pub clients: Vec<Client>,
    #[serde(rename = "equipamentos")]
    pub equipment: Vec<Equipment>,
    #[serde(rename = "empresa")]
    pub company: Option<Company>,
    #[serde(rename = "anexos", default)]
    pub attachments: Vec<Attachment>,
    #[serde(rename = "logs_auditoria", default)]
    pub audit_log: Vec<AuditLogEntry>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(rename = "id_counters", default)]
    pub counters: IdCounters,
}

impl Snapshot {
    /// Bump every counter to at least the highest sequence number present in
    /// its collection. Called after deserializing foreign or legacy data so
    /// newly generated IDs can never collide with imported ones.
    pub fn reconcile_counters(&mut self) {
        fn max_seq(iter: impl Iterator<Item = Option<u64>>) -> u64 {
            iter.flatten().max().unwrap_or(0)
        }

        self.counters.clients = self
            .counters
            .clients
            .max(max_seq(self.clients.iter().map(|c| c.id.seq())));
        self.counters.equipment = self
            .counters
            .equipment
            .max(max_seq(self.equipment.iter().map(|e| e.id.seq())));
        self.counters.orders = self
            .counters
            .orders
            .max(max_seq(self.orders.iter().map(|o| o.id.seq())));
        self.counters.attachments = self
            .counters
            .attachments
            .max(max_seq(self.attachments.iter().map(|a| a.id.seq())));
    }
}
