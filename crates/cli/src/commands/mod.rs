//! CLI command implementations.

pub mod backup;
pub mod export;
pub mod import;
pub mod seed;
pub mod status;

use std::path::Path;

use ordem_store::{DataStore, FileSlot};

/// Open the store over the slot file.
pub(crate) fn open_store(data_file: &Path) -> DataStore {
    DataStore::open(Box::new(FileSlot::new(data_file)))
}
