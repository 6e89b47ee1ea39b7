//! Manifest Store
//!
//! In-memory form of a buildpack `manifest.yml`: the dependency catalog,
//! the default-version pins and the directory the manifest was read from.
//! A [`Manifest`] is immutable once loaded.

mod entry;

pub use entry::{Dependency, ManifestEntry};

use crate::core::error_help::{
    DEFAULT_VERSIONS_HINT, DUPLICATE_ENTRY_HINT, MISSING_DEPENDENCY_HINT,
};
use crate::cache::DependencyCache;
use crate::core::path::version_file;
use crate::core::{BuildpackError, BuildpackResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File layout of `manifest.yml`
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    language: String,
    #[serde(default)]
    default_versions: Vec<Dependency>,
    #[serde(default)]
    dependencies: Vec<ManifestEntry>,
}

#[derive(Debug, Clone)]
pub struct Manifest {
    language: String,
    default_versions: Vec<Dependency>,
    entries: Vec<ManifestEntry>,
    root_dir: PathBuf,
    /// Positions in `entries` for each distinct dependency, in manifest order
    index: HashMap<Dependency, Vec<usize>>,
}

impl Manifest {
    /// Load a manifest from disk.
    ///
    /// The manifest's containing directory, made absolute, becomes the
    /// root directory used to locate `dependencies/` and `VERSION`.
    pub fn load(path: &Path) -> BuildpackResult<Self> {
        let content = fs::read_to_string(path)?;

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let root_dir = std::path::absolute(parent)?;

        Self::parse(&content, root_dir)
    }

    /// Parse manifest content with an explicit root directory
    pub fn parse(content: &str, root_dir: PathBuf) -> BuildpackResult<Self> {
        let file: ManifestFile = serde_yaml::from_str(content)?;

        let mut index: HashMap<Dependency, Vec<usize>> = HashMap::new();
        for (position, entry) in file.dependencies.iter().enumerate() {
            index
                .entry(entry.dependency.clone())
                .or_default()
                .push(position);
        }

        Ok(Self {
            language: file.language,
            default_versions: file.default_versions,
            entries: file.dependencies,
            root_dir,
            index,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn default_versions(&self) -> &[Dependency] {
        &self.default_versions
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// The pinned version for `name`.
    ///
    /// Zero pins and more than one pin are both configuration errors; an
    /// ambiguous table is never resolved by picking one.
    pub fn default_version(&self, name: &str) -> BuildpackResult<&str> {
        let pins: Vec<&Dependency> = self
            .default_versions
            .iter()
            .filter(|d| d.name == name)
            .collect();

        match pins.as_slice() {
            [only] => Ok(only.version.as_str()),
            [] => Err(BuildpackError::configuration(
                format!("no default version for {}", name),
                DEFAULT_VERSIONS_HINT,
            )),
            many => Err(BuildpackError::configuration(
                format!("found {} default versions for {}", many.len(), name),
                DEFAULT_VERSIONS_HINT,
            )),
        }
    }

    /// Look up the catalog entry for an exact (name, version) pair
    pub fn find_entry(&self, dependency: &Dependency) -> BuildpackResult<&ManifestEntry> {
        match self.index.get(dependency).map(Vec::as_slice) {
            Some([position]) => Ok(&self.entries[*position]),
            Some(positions) if positions.len() > 1 => Err(BuildpackError::configuration(
                format!(
                    "found {} entries for {} {}",
                    positions.len(),
                    dependency.name,
                    dependency.version
                ),
                DUPLICATE_ENTRY_HINT,
            )),
            _ => Err(BuildpackError::not_found(
                format!(
                    "dependency {} {} not found",
                    dependency.name, dependency.version
                ),
                MISSING_DEPENDENCY_HINT,
            )),
        }
    }

    /// Every distinct version listed for `name`, in manifest order
    pub fn all_dependency_versions(&self, name: &str) -> Vec<&str> {
        let mut versions: Vec<&str> = Vec::new();
        for entry in self.entries.iter().filter(|e| e.dependency.name == name) {
            if !versions.contains(&entry.dependency.version.as_str()) {
                versions.push(entry.dependency.version.as_str());
            }
        }
        versions
    }

    /// Succeeds when some entry runs on `stack`, or when the catalog is empty
    pub fn check_stack_support(&self, stack: &str) -> BuildpackResult<()> {
        if self.entries.is_empty() || self.entries.iter().any(|e| e.supports_stack(stack)) {
            return Ok(());
        }
        Err(BuildpackError::UnsupportedStack {
            stack: stack.to_string(),
        })
    }

    /// The packaged cache beside the manifest, `dependencies/` unless renamed
    pub fn dependency_cache(&self, dir_name: Option<&str>) -> DependencyCache {
        DependencyCache::new(&self.root_dir, dir_name)
    }

    /// Whether fetches are served from the packaged cache instead of the network
    pub fn is_cached(&self, dir_name: Option<&str>) -> bool {
        self.dependency_cache(dir_name).exists()
    }

    /// Buildpack version from the `VERSION` file beside the manifest
    pub fn version(&self) -> BuildpackResult<String> {
        let content = fs::read_to_string(version_file(&self.root_dir))?;
        Ok(content.trim().to_string())
    }
}
