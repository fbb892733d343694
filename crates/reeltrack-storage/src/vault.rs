//! High-level API for the persisted session state.

use crate::{StateStorage, StorageKeys, StorageResult};
use std::sync::Arc;

/// Typed access to the persisted session entries.
///
/// The vault is the only writer of the session keys: the opaque credential
/// and the two-entry mirror of the current user's identity. Other
/// components hold no durable copy of the credential; they request it here
/// on demand.
#[derive(Clone)]
pub struct SessionVault {
    storage: Arc<dyn StateStorage>,
}

impl SessionVault {
    /// Create a new vault over the given storage backend.
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    // ==========================================
    // Credential
    // ==========================================

    /// Retrieve the stored credential.
    pub fn credential(&self) -> StorageResult<Option<String>> {
        self.storage.get(StorageKeys::ACCESS_TOKEN)
    }

    /// Store the credential.
    pub fn set_credential(&self, token: &str) -> StorageResult<()> {
        self.storage.set(StorageKeys::ACCESS_TOKEN, token)
    }

    /// Remove the credential, returning whether one existed.
    pub fn clear_credential(&self) -> StorageResult<bool> {
        self.storage.remove(StorageKeys::ACCESS_TOKEN)
    }

    /// Check if a credential is stored.
    pub fn has_credential(&self) -> StorageResult<bool> {
        self.storage.has(StorageKeys::ACCESS_TOKEN)
    }

    // ==========================================
    // Identity mirror
    // ==========================================

    /// Retrieve the mirrored identity entries.
    pub fn identity(&self) -> StorageResult<(Option<String>, Option<String>)> {
        let id = self.storage.get(StorageKeys::CURRENT_USER_ID)?;
        let name = self.storage.get(StorageKeys::CURRENT_USER_NAME)?;
        Ok((id, name))
    }

    /// Store both identity entries. The two fields always move together.
    pub fn set_identity(&self, id: &str, display_name: &str) -> StorageResult<()> {
        self.storage.set(StorageKeys::CURRENT_USER_ID, id)?;
        self.storage.set(StorageKeys::CURRENT_USER_NAME, display_name)?;
        Ok(())
    }

    /// Remove both identity entries.
    pub fn clear_identity(&self) -> StorageResult<()> {
        let _ = self.storage.remove(StorageKeys::CURRENT_USER_ID)?;
        let _ = self.storage.remove(StorageKeys::CURRENT_USER_NAME)?;
        Ok(())
    }

    // ==========================================
    // Clear All
    // ==========================================

    /// Clear every session entry.
    pub fn clear_all(&self) -> StorageResult<()> {
        let _ = self.clear_credential()?;
        self.clear_identity()
    }
}
