use serde::{Deserialize, Serialize};
use std::fmt;

/// A (name, version) pair identifying one piece of software.
///
/// Equality is exact string equality on both fields; there is no semantic
/// version matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// One record of the manifest's `dependencies` catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryRecord", into = "EntryRecord")]
pub struct ManifestEntry {
    pub dependency: Dependency,
    pub uri: String,
    /// Expected digest, lowercase hex
    pub md5: String,
    /// Compatible deployment stacks (informational for fetching)
    pub cf_stacks: Vec<String>,
}

/// On-disk shape of an entry: the dependency fields sit inline.
#[derive(Clone, Serialize, Deserialize)]
struct EntryRecord {
    name: String,
    version: String,
    uri: String,
    md5: String,
    #[serde(default)]
    cf_stacks: Vec<String>,
}

impl From<EntryRecord> for ManifestEntry {
    fn from(record: EntryRecord) -> Self {
        Self {
            dependency: Dependency::new(record.name, record.version),
            uri: record.uri,
            md5: record.md5,
            cf_stacks: record.cf_stacks,
        }
    }
}

impl From<ManifestEntry> for EntryRecord {
    fn from(entry: ManifestEntry) -> Self {
        Self {
            name: entry.dependency.name,
            version: entry.dependency.version,
            uri: entry.uri,
            md5: entry.md5,
            cf_stacks: entry.cf_stacks,
        }
    }
}

impl ManifestEntry {
    pub fn supports_stack(&self, stack: &str) -> bool {
        self.cf_stacks.iter().any(|s| s == stack)
    }
}
