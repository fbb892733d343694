//! Identity cache shared by every view.

use crate::context::ExecutionContext;
use crate::SessionResult;
use reeltrack_storage::{SessionVault, StateStorage};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Cached identity of the signed-in user.
///
/// Both fields are set together by the identity-resolution sequence and
/// cleared together on logout; the only asymmetric value is the initial
/// `None`/`None` default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentIdentity {
    pub id: Option<String>,
    pub display_name: Option<String>,
}

impl CurrentIdentity {
    /// The empty identity published before anyone has signed in.
    pub fn anonymous() -> Self {
        Self {
            id: None,
            display_name: None,
        }
    }
}

/// Holder and broadcaster of the current user's identity.
///
/// Seeds itself synchronously from the durable mirror at construction, so
/// the very first emission reflects the last known identity before any
/// network round trip completes. Views (header, profile, playlists)
/// subscribe and re-render on change.
pub struct UserState {
    vault: SessionVault,
    context: ExecutionContext,
    identity_tx: watch::Sender<CurrentIdentity>,
}

impl UserState {
    /// Create the service, seeded from durable storage under the browser
    /// pass. The server pass starts anonymous — it has no durable mirror.
    pub fn new(storage: Arc<dyn StateStorage>, context: ExecutionContext) -> Self {
        let vault = SessionVault::new(storage);

        let initial = if context.is_browser() {
            match vault.identity() {
                Ok((id, display_name)) => CurrentIdentity { id, display_name },
                Err(e) => {
                    warn!(error = %e, "Identity mirror read failed, starting anonymous");
                    CurrentIdentity::anonymous()
                }
            }
        } else {
            CurrentIdentity::anonymous()
        };

        let (identity_tx, _) = watch::channel(initial);

        Self {
            vault,
            context,
            identity_tx,
        }
    }

    /// Persist and publish a new identity. Both fields change together.
    pub fn set_current_user(&self, id: &str, display_name: &str) -> SessionResult<()> {
        if self.context.is_browser() {
            self.vault.set_identity(id, display_name)?;
        }

        debug!(user_id = %id, "Current user updated");
        self.identity_tx.send_replace(CurrentIdentity {
            id: Some(id.to_string()),
            display_name: Some(display_name.to_string()),
        });
        Ok(())
    }

    /// Remove the durable mirror and publish the anonymous identity.
    pub fn clear_user(&self) -> SessionResult<()> {
        if self.context.is_browser() {
            self.vault.clear_identity()?;
        }

        debug!("Current user cleared");
        self.identity_tx.send_replace(CurrentIdentity::anonymous());
        Ok(())
    }

    /// Synchronous read of the latest identity.
    pub fn current(&self) -> CurrentIdentity {
        self.identity_tx.borrow().clone()
    }

    /// Subscribe to identity changes; the receiver observes the current
    /// value immediately.
    pub fn subscribe(&self) -> watch::Receiver<CurrentIdentity> {
        self.identity_tx.subscribe()
    }
}
