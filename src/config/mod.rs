use crate::core::path::{config_file, ensure_dir};
use crate::core::{BuildpackError, BuildpackResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming the stack the app is staged on
pub const STACK_ENV: &str = "CF_STACK";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// User-Agent header sent with dependency downloads
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Fail a download on a non-2xx status before writing anything.
    /// When disabled the body is written and left to the checksum check.
    #[serde(default = "default_true")]
    pub reject_http_errors: bool,

    /// Name of the cache directory beside the manifest (defaults to `dependencies`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies_dir: Option<String>,

    /// Stack used by `check-stack` when none is given and `CF_STACK` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

fn default_user_agent() -> String {
    format!("buildpack/{}", env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            reject_http_errors: true,
            dependencies_dir: None,
            stack: None,
        }
    }
}

impl Config {
    /// Load config from platform-specific config directory, creating default if it doesn't exist
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\buildpack\config.yaml
    /// - Linux: ~/.config/buildpack/config.yaml
    /// - macOS: ~/Library/Application Support/buildpack/config.yaml
    pub fn load() -> BuildpackResult<Self> {
        let config_path = config_file()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> BuildpackResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| BuildpackError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save_to(&self, path: &Path) -> BuildpackResult<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| BuildpackError::Path("Invalid config path".to_string()))?;
        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| BuildpackError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }

    /// Stack to check against: `CF_STACK` first, then the config file
    pub fn stack(&self) -> Option<String> {
        std::env::var(STACK_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.stack.clone())
    }
}
