//! Environment-derived settings

use eyre::{Result, bail};
use std::path::PathBuf;

/// Base directory holding `models.json` and the per-app `fixtures/` and
/// `data/` directories. Defaults to the current directory.
pub const BASE_DIR_VAR: &str = "LOADLINES_BASE_DIR";

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_dir: PathBuf,
}

impl Settings {
    /// Read settings from the process environment (after dotenv sourcing).
    pub fn from_env() -> Result<Self> {
        let base_dir = PathBuf::from(
            std::env::var(BASE_DIR_VAR).unwrap_or_else(|_| ".".to_string()),
        );
        if !base_dir.is_dir() {
            bail!("Base directory does not exist: {}", base_dir.display());
        }
        Ok(Self { base_dir })
    }
}
