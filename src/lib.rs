//! Buildpack dependency resolution
//!
//! Resolves dependencies named in a buildpack `manifest.yml` to
//! checksum-verified artifacts on local disk, reading from the packaged
//! `dependencies/` cache when present and downloading otherwise.

pub use buildpack_core::{format_error_with_help, BuildpackError, BuildpackResult, ErrorHelp};

/// Core module re-exported from buildpack-core.
pub mod core {
    pub use buildpack_core::core::*;
    pub use buildpack_core::*;
}

/// User configuration.
pub mod config;

/// Cache-key derivation and the packaged dependency cache.
pub mod cache;

/// Manifest loading and lookup.
pub mod manifest;

/// Checksum verification, transport and the dependency resolver.
pub mod package;

/// Dependency injection seams.
pub mod di;

pub use manifest::{Dependency, Manifest, ManifestEntry};
pub use package::DependencyResolver;
