use crate::core::error::{BuildpackError, BuildpackResult};
use std::path::{Path, PathBuf};

/// Name of the cache directory that sits beside a packaged manifest.
pub const DEPENDENCIES_DIR: &str = "dependencies";

/// Get the Buildpack home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\buildpack
/// - Linux: ~/.config/buildpack
/// - macOS: ~/Library/Application Support/buildpack
pub fn buildpack_home() -> BuildpackResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| BuildpackError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("buildpack"))
}

/// Get the config file path (`<home>/config.yaml`)
pub fn config_file() -> BuildpackResult<PathBuf> {
    Ok(buildpack_home()?.join("config.yaml"))
}

/// Get the VERSION file beside a manifest
pub fn version_file(manifest_root: &Path) -> PathBuf {
    manifest_root.join("VERSION")
}

/// Ensure a directory exists, creating it and all parents if needed
pub fn ensure_dir(path: &Path) -> BuildpackResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
