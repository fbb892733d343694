//! File system paths for the shell.

use crate::{CoreError, CoreResult};
use std::path::PathBuf;

/// Manages file system paths for the shell.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for runtime files (~/.reeltrack)
    base_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance rooted at `~/.reeltrack`.
    pub fn new() -> CoreResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))?;

        Ok(Self {
            base_dir: home.join(".reeltrack"),
        })
    }

    /// Create a new Paths instance with a custom base directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.reeltrack).
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config file path (~/.reeltrack/config.json).
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the durable session-state file path (~/.reeltrack/state.json).
    ///
    /// This file backs the browser-context durable storage (credential and
    /// current-user mirror) when the shell runs natively.
    pub fn state_file(&self) -> PathBuf {
        self.base_dir.join("state.json")
    }

    /// Get the logs directory (~/.reeltrack/logs).
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure all required directories exist.
    pub fn ensure_dirs(&self) -> CoreResult<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().expect("Failed to determine home directory")
    }
}
