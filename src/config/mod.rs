//! Configuration management

mod settings;
mod state;

pub use settings::{AppConfig, WindowConfig};
pub use state::StateStore;

use anyhow::Result;
use std::path::PathBuf;

/// Platform configuration directory for clockface
pub fn config_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("org", "clockface", "clockface")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(dirs.config_dir().to_path_buf())
}
