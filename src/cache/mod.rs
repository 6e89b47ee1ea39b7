use crate::core::path::DEPENDENCIES_DIR;
use crate::core::{BuildpackError, BuildpackResult};
use std::path::{Path, PathBuf};
use url::Url;

/// Placeholder written over any user name and password in a URI.
const REDACTED: &str = "-redacted-";

/// Reduce a dependency URI to its stable resource identity.
///
/// The manifest's own spelling is kept and cut at the first `?` or `#`.
/// Only a URI carrying userinfo is re-serialized, with the credentials
/// redacted, so the result is safe to log and matches the file names of a
/// packaged `dependencies/` directory.
pub fn filter_uri(uri: &str) -> BuildpackResult<String> {
    let mut url = Url::parse(uri).map_err(|source| BuildpackError::Uri {
        uri: uri.to_string(),
        source,
    })?;

    if url.username().is_empty() && url.password().is_none() {
        let end = uri.find(['?', '#']).unwrap_or(uri.len());
        return Ok(uri[..end].to_string());
    }

    url.set_query(None);
    url.set_fragment(None);
    // Only fails for URIs without a host, which cannot carry credentials
    let _ = url.set_username(REDACTED);
    let _ = url.set_password(Some(REDACTED));

    Ok(url.into())
}

/// File name of a cached artifact for an already-filtered URI
pub fn cache_key(filtered_uri: &str) -> String {
    filtered_uri.replace(['/', ':', '?', '&'], "_")
}

/// The `dependencies/` directory shipped inside a packaged (cached) buildpack
#[derive(Debug, Clone)]
pub struct DependencyCache {
    root: PathBuf,
}

impl DependencyCache {
    /// Cache rooted at `<manifest_root>/<dir_name>`
    pub fn new(manifest_root: &Path, dir_name: Option<&str>) -> Self {
        Self {
            root: manifest_root.join(dir_name.unwrap_or(DEPENDENCIES_DIR)),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A fetch is served from the cache whenever the directory exists
    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    /// Location of the cached copy for a filtered URI
    pub fn artifact_path(&self, filtered_uri: &str) -> PathBuf {
        self.root.join(cache_key(filtered_uri))
    }
}
