//! Ordem Backup - remote gist backup client.
//!
//! Manual cloud backup: the caller exports the aggregate as text (see
//! `ordem-store`), pushes it to a named file inside a hosted gist, and can
//! later pull that file back and feed it to the store's import.
//!
//! One HTTP round trip per operation - no retry, no conflict resolution, no
//! idempotency handling. The content pushed is whatever snapshot the caller
//! exported at call time; local mutations during the round trip are not
//! reflected (last snapshot wins).

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod error;
mod types;

pub use client::GistClient;
pub use error::BackupError;
