//! Instance state persisted across an application restart.
//!
//! The host writes the clock's [`PersistedConfig`] when its window closes and
//! takes it back on the next start. Taking deletes the file so a snapshot is
//! restored at most once.

use anyhow::{Context, Result};
use clockface_types::PersistedConfig;
use log::{debug, warn};
use std::path::{Path, PathBuf};

const STATE_FILE_NAME: &str = "instance_state.json";

/// File-backed store for one widget's saved state
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(super::config_dir()?.join(STATE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, config: &PersistedConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = config.to_json()?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        debug!("Saved clock state to {}", self.path.display());
        Ok(())
    }

    /// Read and remove the saved snapshot. A missing or unreadable file is
    /// treated as "no saved state".
    pub fn take(&self) -> Option<PersistedConfig> {
        if !self.path.exists() {
            debug!("No saved clock state at {}", self.path.display());
            return None;
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                return None;
            }
        };

        if let Err(e) = self.discard() {
            warn!("Failed to remove consumed state file: {}", e);
        }

        match PersistedConfig::from_json(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Discarding saved clock state: {}", e);
                None
            }
        }
    }

    /// Drop any saved snapshot without reading it
    pub fn discard(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
