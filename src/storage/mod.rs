//! Process-local key-value settings storage
//!
//! The store keeps the whole game collection under a single key, so the
//! interface is deliberately small: read a string slot, write a string
//! slot. Backends are swapped via static dispatch (the store is generic
//! over [`SettingsStore`]).

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors that can occur in the settings storage layer
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A process-local key-value settings store
pub trait SettingsStore {
    /// Read the value stored under `key`; `None` when the slot is empty
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, overwriting any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
