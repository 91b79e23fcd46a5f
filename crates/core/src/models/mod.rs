//! Domain records and the root aggregate.
//!
//! Every record is a plain serde struct. Mutations happen only through the
//! store's operations; the patch structs (`ClientPatch`, `EquipmentPatch`,
//! `OrderPatch`) model partial updates - a `None` field is left untouched.

pub mod attachment;
pub mod audit;
pub mod client;
pub mod company;
pub mod equipment;
pub mod order;
pub mod settings;
pub mod snapshot;

pub use attachment::{Attachment, AttachmentOwner};
pub use audit::{AuditLogEntry, DiffMap, FieldChange};
pub use client::{Client, ClientPatch, NewClient};
pub use company::{Company, CompanyInput};
pub use equipment::{Equipment, EquipmentPatch, NewEquipment};
pub use order::{NewServiceOrder, OrderPatch, ServiceOrder};
pub use settings::{GistConfig, Settings};
pub use snapshot::{IdCounters, Snapshot};
