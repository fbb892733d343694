//! Token store and authentication signal service.

use crate::auth_fsm::{AuthSignal, SignalInput, SignalMachine};
use crate::context::ExecutionContext;
use crate::{SessionError, SessionResult};
use reeltrack_storage::{SessionVault, StateStorage, StorageKeys};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Owner of the session credential and publisher of the auth signal.
///
/// The credential lives in durable storage under the vault; no other
/// component keeps a copy. The signal is published on a watch channel —
/// multicast, replaying the latest value to late subscribers — so a guard
/// evaluated after construction still sees the already-resolved state.
///
/// Construction performs the token-presence check exactly once,
/// synchronously, so the window in which the signal is
/// [`AuthSignal::Unknown`] is minimal and deterministic.
pub struct AuthService {
    vault: SessionVault,
    context: ExecutionContext,
    machine: Mutex<SignalMachine>,
    signal_tx: watch::Sender<AuthSignal>,
}

impl AuthService {
    /// Create the service and publish the initial signal.
    pub fn new(storage: Arc<dyn StateStorage>, context: ExecutionContext) -> Self {
        let (signal_tx, _) = watch::channel(AuthSignal::Unknown);

        let service = Self {
            vault: SessionVault::new(storage),
            context,
            machine: Mutex::new(SignalMachine::new()),
            signal_tx,
        };
        service.check_auth_status();
        service
    }

    /// Evaluate token presence once and publish the first terminal value.
    fn check_auth_status(&self) {
        let present = self.token_present();
        debug!(
            platform = ?self.context.platform(),
            present,
            "Initial credential presence check"
        );

        let input = if present {
            SignalInput::SessionDetected
        } else {
            SignalInput::NoSession
        };
        if let Err(e) = self.transition(&input) {
            warn!(error = %e, "Initial auth transition failed");
        }
    }

    fn token_present(&self) -> bool {
        if self.context.is_browser() {
            // Browser storage is treated as always available; a failing
            // backend reads as "no session".
            self.vault.has_credential().unwrap_or_else(|e| {
                warn!(error = %e, "Credential presence check failed");
                false
            })
        } else {
            self.context.cookie(StorageKeys::ACCESS_TOKEN).is_some()
        }
    }

    /// Feed the machine and publish the resulting signal.
    fn transition(&self, input: &SignalInput) -> SessionResult<AuthSignal> {
        let mut machine = self.machine.lock().expect("lock poisoned");
        let old_signal = AuthSignal::from(machine.state());

        machine.consume(input).map_err(|_| {
            SessionError::InvalidTransition(format!(
                "Cannot apply {:?} in state {:?}",
                input,
                machine.state()
            ))
        })?;

        let new_signal = AuthSignal::from(machine.state());
        drop(machine);

        if old_signal != new_signal {
            debug!(?old_signal, ?new_signal, "Auth signal transition");
        }
        self.signal_tx.send_replace(new_signal);

        Ok(new_signal)
    }

    /// The current credential, if any.
    ///
    /// Browser: read from durable storage. Server: sourced from the
    /// inbound request's cookies; browser-only storage is never touched.
    pub fn token(&self) -> SessionResult<Option<String>> {
        if self.context.is_browser() {
            Ok(self.vault.credential()?)
        } else {
            Ok(self.context.cookie(StorageKeys::ACCESS_TOKEN))
        }
    }

    /// Whether a credential is currently available.
    pub fn has_token(&self) -> SessionResult<bool> {
        Ok(self.token()?.is_some())
    }

    /// Persist a freshly-issued credential and publish
    /// [`AuthSignal::Authenticated`] before returning.
    ///
    /// No-op under Server context.
    pub fn set_token(&self, token: &str) -> SessionResult<()> {
        if !self.context.is_browser() {
            return Ok(());
        }

        self.vault.set_credential(token)?;
        debug!("Credential stored");
        self.transition(&SignalInput::TokenStored)?;
        Ok(())
    }

    /// Remove the credential and publish [`AuthSignal::NotAuthenticated`].
    ///
    /// Idempotent; no-op under Server context.
    pub fn clear_token(&self) -> SessionResult<()> {
        if !self.context.is_browser() {
            return Ok(());
        }

        let existed = self.vault.clear_credential()?;
        if existed {
            debug!("Credential removed");
        }
        self.transition(&SignalInput::TokenCleared)?;
        Ok(())
    }

    /// Synchronous read of the current signal.
    pub fn signal(&self) -> AuthSignal {
        *self.signal_tx.borrow()
    }

    /// Returns true if the signal is currently `Authenticated`.
    pub fn is_authenticated(&self) -> bool {
        self.signal().is_authenticated()
    }

    /// Subscribe to signal changes.
    ///
    /// The receiver observes the current value immediately; a subscriber
    /// arriving after the initial presence check never waits for the next
    /// transition to learn the state.
    pub fn subscribe(&self) -> watch::Receiver<AuthSignal> {
        self.signal_tx.subscribe()
    }
}
