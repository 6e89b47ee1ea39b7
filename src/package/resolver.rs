//! Dependency Resolver
//!
//! Turns a (name, version) request into a verified file on disk. A single
//! fetch runs entry lookup, source selection, transport and MD5
//! verification in that order; any failure ends the call.

use super::checksum::verify_md5;
use super::extractor::ArtifactExtractor;
use super::transport::ArtifactTransport;
use crate::cache::filter_uri;
use crate::config::Config;
use crate::core::error_help::{AMBIGUOUS_VERSION_HINT, MISSING_DEPENDENCY_HINT};
use crate::core::{BuildpackError, BuildpackResult};
use crate::di::Transport;
use crate::manifest::{Dependency, Manifest};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

pub struct DependencyResolver<'m> {
    manifest: &'m Manifest,
    /// Renamed cache directory from the config, if any
    dependencies_dir: Option<String>,
    transport: Arc<dyn Transport>,
}

impl<'m> DependencyResolver<'m> {
    /// Resolver using the real file system and HTTP client
    pub fn new(manifest: &'m Manifest, config: &Config) -> BuildpackResult<Self> {
        let transport = Arc::new(ArtifactTransport::new(config)?);
        Ok(Self::with_transport(manifest, config, transport))
    }

    pub fn with_transport(
        manifest: &'m Manifest,
        config: &Config,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            manifest,
            dependencies_dir: config.dependencies_dir.clone(),
            transport,
        }
    }

    /// Fetch `dependency` to `output`, verifying it against the manifest MD5.
    ///
    /// When the cache directory exists beside the manifest the artifact is
    /// copied from it and the network is never used. On checksum failure
    /// `output` is removed before the error is returned.
    pub fn fetch(&self, dependency: &Dependency, output: &Path) -> BuildpackResult<()> {
        let entry = self.manifest.find_entry(dependency)?;
        let filtered_uri = filter_uri(&entry.uri)?;

        let dir_name = self.dependencies_dir.as_deref();
        if self.manifest.is_cached(dir_name) {
            let source = self
                .manifest
                .dependency_cache(dir_name)
                .artifact_path(&filtered_uri);
            debug!(dependency = %dependency, source = %source.display(), "Using cached dependency");
            self.transport.copy_file(&source, output)?;
        } else {
            debug!(dependency = %dependency, uri = %filtered_uri, "Downloading dependency");
            self.transport.download(&entry.uri, output)?;
        }

        if let Err(err) = verify_md5(output, &entry.md5) {
            let cleanup = discard(output);
            return Err(match err {
                BuildpackError::Integrity {
                    expected, actual, ..
                } => BuildpackError::Integrity {
                    expected,
                    actual,
                    cleanup,
                },
                other => other,
            });
        }

        info!("Downloaded [{}] to [{}]", filtered_uri, output.display());
        Ok(())
    }

    /// Fetch `dependency` and unpack it into `output_dir`.
    ///
    /// The artifact is staged in a temporary directory that is removed on
    /// every exit path.
    pub fn install(&self, dependency: &Dependency, output_dir: &Path) -> BuildpackResult<PathBuf> {
        let entry = self.manifest.find_entry(dependency)?;
        let file_name = artifact_file_name(&entry.uri, dependency)?;

        let staging = tempfile::tempdir()?;
        let staged = staging.path().join(file_name);
        self.fetch(dependency, &staged)?;

        ArtifactExtractor::new(output_dir.to_path_buf()).extract(&staged)
    }

    /// Install the sole version of `name` listed in the manifest
    pub fn install_only_version(&self, name: &str, install_dir: &Path) -> BuildpackResult<PathBuf> {
        let versions = self.manifest.all_dependency_versions(name);
        match versions.as_slice() {
            [version] => self.install(&Dependency::new(name, *version), install_dir),
            [] => Err(BuildpackError::not_found(
                format!("no versions of {} found", name),
                MISSING_DEPENDENCY_HINT,
            )),
            _ => Err(BuildpackError::configuration(
                format!("more than one version of {} found", name),
                AMBIGUOUS_VERSION_HINT,
            )),
        }
    }
}

/// Remove a file that failed verification.
///
/// Returns the removal error as text so it can ride along with the primary
/// error instead of replacing it.
fn discard(path: &Path) -> Option<String> {
    match fs::remove_file(path) {
        Ok(()) => None,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to remove unverified file");
            Some(e.to_string())
        }
    }
}

/// Last path segment of the URI, or `<name>-<version>` when it has none
fn artifact_file_name(uri: &str, dependency: &Dependency) -> BuildpackResult<String> {
    let url = Url::parse(uri).map_err(|source| BuildpackError::Uri {
        uri: uri.to_string(),
        source,
    })?;

    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(segment.unwrap_or_else(|| format!("{}-{}", dependency.name, dependency.version)))
}
