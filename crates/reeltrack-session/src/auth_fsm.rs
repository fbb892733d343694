//! Authentication signal state machine using rust-fsm.
//!
//! The signal starts Unknown and moves to a terminal value on the single
//! synchronous token-presence check at construction. After that first
//! decision the machine only ever moves between the two terminal values
//! (login and logout cycles); no input leads back to Unknown, so consumers
//! that have seen a terminal value can never observe the signal "unset".
//!
//! ## State Diagram
//!
//! ```text
//! ┌─────────────┐ SessionDetected / TokenStored ┌─────────────────┐
//! │   Unknown   │ ─────────────────────────────►│  Authenticated  │
//! └──────┬──────┘                               └───────┬─────────┘
//!        │ NoSession / TokenCleared              ▲      │
//!        ▼                                       │      │ TokenCleared
//! ┌──────────────────┐        TokenStored        │      ▼
//! │ NotAuthenticated │ ───────────────────────────┘ (and back again,
//! └──────────────────┘                              repeatedly)
//! ```

use rust_fsm::*;
use serde::{Deserialize, Serialize};

// Define the FSM using rust-fsm's declarative macro.
// This generates a module `signal_machine` with:
// - signal_machine::State (enum)
// - signal_machine::Input (enum)
// - signal_machine::StateMachine (type alias)
state_machine! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub signal_machine(Unknown)

    Unknown => {
        SessionDetected => Authenticated,
        NoSession => NotAuthenticated,
        TokenStored => Authenticated,
        TokenCleared => NotAuthenticated
    },
    Authenticated => {
        TokenStored => Authenticated,
        TokenCleared => NotAuthenticated
    },
    NotAuthenticated => {
        TokenStored => Authenticated,
        TokenCleared => NotAuthenticated
    }
}

// Re-export the generated types with clearer names
pub use signal_machine::Input as SignalInput;
pub use signal_machine::State as SignalMachineState;
pub use signal_machine::StateMachine as SignalMachine;

/// Published authentication status.
///
/// This is the value carried on the multicast channel that guards and
/// views subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthSignal {
    /// No decision yet; the presence check has not run.
    Unknown,
    /// A credential is present.
    Authenticated,
    /// No credential is present.
    NotAuthenticated,
}

impl AuthSignal {
    /// Returns true once the signal has reached a decision.
    ///
    /// Guards wait for the first terminal value and never decide on
    /// [`AuthSignal::Unknown`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AuthSignal::Unknown)
    }

    /// Returns true if the session currently holds a credential.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthSignal::Authenticated)
    }
}

impl From<&SignalMachineState> for AuthSignal {
    fn from(state: &SignalMachineState) -> Self {
        match state {
            SignalMachineState::Unknown => AuthSignal::Unknown,
            SignalMachineState::Authenticated => AuthSignal::Authenticated,
            SignalMachineState::NotAuthenticated => AuthSignal::NotAuthenticated,
        }
    }
}
