//! Ordem Core - Shared domain types library.
//!
//! This crate provides the common types used across all Ordem components:
//! - `store` - Local data store (persistence, audit trail, observers)
//! - `backup` - Remote gist backup client
//! - `cli` - Command-line management tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the domain enums
//! - [`models`] - The domain records and the `Snapshot` root aggregate
//!
//! # Wire format
//!
//! Field names on the wire are the Portuguese names of the original data
//! files (`tipo_cliente`, `nome_fantasia`, `ordens_servico`, ...); Rust
//! field names are English and mapped via serde renames. Changing a rename
//! breaks compatibility with existing persisted snapshots.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
