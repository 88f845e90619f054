//! Configuration handling for the enquiry form

use crate::state::ValidationRules;
use anyhow::{Context, Result};
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, read from `config.json` in the platform config dir
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnquiryConfig {
    /// Directory the exported document is written to
    pub export_dir: Option<PathBuf>,
    /// Reject submissions without a capacity
    pub require_capacity: Option<bool>,
}

impl EnquiryConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "enquiry", "enquiry-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Configured export directory, else the user's Downloads, else the cwd
    pub fn export_dir_or_default(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(|| {
                UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            require_capacity: self.require_capacity.unwrap_or(false),
        }
    }
}
