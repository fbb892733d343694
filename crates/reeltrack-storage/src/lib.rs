//! Durable-storage abstraction for the Reeltrack session core.
//!
//! The front-end persists a small amount of session state (the opaque
//! credential and a mirror of the current user's id and display name).
//! Business logic never touches a concrete store directly; it goes through
//! the [`StateStorage`] trait so tests and the server-rendering pass can
//! substitute an in-memory store:
//! - [`MemoryStorage`] — in-memory map; the backend under Server context
//! - [`FileStorage`] — JSON-file store; the native rendition of browser
//!   local storage
//! - [`SessionVault`] — typed high-level API over the raw key/value surface

mod file;
mod keys;
mod memory;
mod traits;
mod vault;

pub use file::FileStorage;
pub use keys::StorageKeys;
pub use memory::MemoryStorage;
pub use traits::StateStorage;
pub use vault::SessionVault;

use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backing-store failure
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
