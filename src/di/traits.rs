//! Trait definitions for dependency injection

use crate::core::BuildpackResult;
use std::path::Path;

/// Artifact Transport
///
/// Moves the bytes of an artifact to a destination path, creating any
/// missing parent directories. Both operations block until the copy has
/// finished and return the number of bytes written.
pub trait Transport: Send + Sync {
    /// Copy a local file (a cached artifact) to `dest`
    fn copy_file(&self, source: &Path, dest: &Path) -> BuildpackResult<u64>;

    /// GET `uri` and stream the response body to `dest`
    fn download(&self, uri: &str, dest: &Path) -> BuildpackResult<u64>;
}
