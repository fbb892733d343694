//! Execution-context classification.
//!
//! The application renders twice: once in a server process (pre-render)
//! and once in the browser-like client. Durable storage and window
//! navigation only exist in the latter, so every component that touches
//! them receives the context through its constructor instead of probing
//! ambient globals.

use std::collections::HashMap;

/// Which pass of the dual-rendering lifecycle the process is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Client process with durable storage and real navigation.
    Browser,
    /// Server pre-render pass; no durable storage, no navigation.
    Server,
}

/// Read-only execution context, fixed at construction by the hosting
/// runtime.
///
/// Under [`Platform::Server`] the context may carry the inbound request's
/// cookies, which is the only credential source available to that pass.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    platform: Platform,
    request_cookies: HashMap<String, String>,
}

impl ExecutionContext {
    /// Browser context.
    pub fn browser() -> Self {
        Self {
            platform: Platform::Browser,
            request_cookies: HashMap::new(),
        }
    }

    /// Server context with no inbound cookies.
    pub fn server() -> Self {
        Self {
            platform: Platform::Server,
            request_cookies: HashMap::new(),
        }
    }

    /// Server context carrying the inbound request's cookies.
    pub fn server_with_cookies(request_cookies: HashMap<String, String>) -> Self {
        Self {
            platform: Platform::Server,
            request_cookies,
        }
    }

    /// The platform flag.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns true when running in the browser pass.
    pub fn is_browser(&self) -> bool {
        self.platform == Platform::Browser
    }

    /// Look up an inbound-request cookie (server pass only; always `None`
    /// in the browser, where cookies are not threaded through).
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.request_cookies.get(name).cloned()
    }
}
