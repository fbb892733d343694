//! Session and cross-view state synchronization core for Reeltrack.
//!
//! This crate provides:
//! - The tri-state authentication signal and its state machine
//! - Token-store ownership of the opaque session credential
//! - The identity cache shared by every view (header, profile, playlists)
//! - Navigation guards for the protected and browser-only route groups
//! - The route interceptor reacting to credential rejection mid-session
//! - The sequential login/register/logout flows
//!
//! The front-end runs twice — a server pre-render pass and the browser
//! proper — and every component here is explicit about which pass it is
//! executing in via [`ExecutionContext`].

mod auth;
mod auth_fsm;
mod bootstrap;
mod context;
mod error;
mod flow;
mod guard;
mod identity;
mod interceptor;
mod nav;

pub use auth::AuthService;
pub use auth_fsm::signal_machine;
pub use auth_fsm::{AuthSignal, SignalInput, SignalMachine, SignalMachineState};
pub use bootstrap::{bootstrap, SessionServices};
pub use context::{ExecutionContext, Platform};
pub use error::{SessionError, SessionResult};
pub use flow::SessionFlow;
pub use guard::{auth_guard, browser_guard, GuardDecision};
pub use identity::{CurrentIdentity, UserState};
pub use interceptor::{AuthInterceptor, SESSION_EXPIRED_NOTICE};
pub use nav::{Navigator, Notifier, Route};
