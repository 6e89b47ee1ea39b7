//! Operator-facing guidance attached to errors.

use super::error::BuildpackError;

/// Hint for a manifest whose `default_versions` table is missing or ambiguous.
pub const DEFAULT_VERSIONS_HINT: &str =
    "The buildpack manifest is misconfigured for 'default_versions'. \
     Contact your Cloud Foundry operator/admin. For more information, see \
     https://docs.cloudfoundry.org/buildpacks/custom.html#specifying-default-versions";

/// Hint for a dependency that the manifest does not list.
pub const MISSING_DEPENDENCY_HINT: &str =
    "The requested dependency is not listed in the buildpack manifest. \
     For more information on manifest 'dependencies', see \
     https://docs.cloudfoundry.org/buildpacks/custom.html#core-extension";

/// Hint for a manifest listing the same dependency more than once.
pub const DUPLICATE_ENTRY_HINT: &str =
    "The buildpack manifest lists the same dependency name and version more than once. \
     Remove the duplicate entry from 'dependencies'.";

/// Hint for an unversioned install when the manifest lists several versions.
pub const AMBIGUOUS_VERSION_HINT: &str =
    "The buildpack manifest lists more than one version of this dependency. \
     Request a specific version instead.";

/// Additional guidance that can be rendered under an error.
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for BuildpackError {
    fn help(&self) -> Option<String> {
        match self {
            BuildpackError::Configuration { hint, .. } | BuildpackError::NotFound { hint, .. } => {
                Some((*hint).to_string())
            }
            BuildpackError::Integrity { cleanup, .. } => {
                let mut help = "The artifact does not match the checksum in the manifest. \
                                If it comes from the dependencies/ cache, re-package the buildpack."
                    .to_string();
                if let Some(cleanup) = cleanup {
                    help.push_str(&format!("\nThe bad file could not be removed: {}", cleanup));
                }
                Some(help)
            }
            BuildpackError::HttpStatus { .. }
            | BuildpackError::Download { .. }
            | BuildpackError::Network(_) => Some(
                "Check network access to the dependency URI, or use a cached buildpack."
                    .to_string(),
            ),
            BuildpackError::UnsupportedStack { .. } => Some(
                "Check the 'cf_stacks' of the manifest dependencies, or push with a supported stack."
                    .to_string(),
            ),
            BuildpackError::Parse(_) => {
                Some("Check manifest.yml for YAML syntax and field types.".to_string())
            }
            _ => None,
        }
    }
}

/// Render an error followed by its help text, if any.
pub fn format_error_with_help(error: &BuildpackError) -> String {
    match error.help() {
        Some(help) => format!("Error: {}\n\n{}", error, help),
        None => format!("Error: {}", error),
    }
}
