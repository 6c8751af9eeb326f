//! Optional `config.json` application settings.

use crate::error::Result;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name searched for next to the executable, then in the working directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings read from `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Audio file played once the run completes.
    pub completion_chime: Option<PathBuf>,
    /// Fetch GitHub repository links as branch archives.
    pub github_archives: bool,
}

impl AppConfig {
    /// Reads and decodes a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Finds the first existing config file among the default locations.
    pub fn locate() -> Option<PathBuf> {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)));
        let in_cwd = std::env::current_dir()
            .ok()
            .map(|dir| dir.join(CONFIG_FILE_NAME));

        beside_exe.into_iter().chain(in_cwd).find(|p| p.is_file())
    }
}
