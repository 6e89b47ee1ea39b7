use crate::core::path::ensure_dir;
use crate::core::{BuildpackError, BuildpackResult};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tar::Archive;

/// Archive formats recognised by file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    TarGz,
    Zip,
    /// Anything else is installed as-is
    Plain,
}

impl ArchiveFormat {
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
            ArchiveFormat::TarGz
        } else if lower.ends_with(".zip") {
            ArchiveFormat::Zip
        } else {
            ArchiveFormat::Plain
        }
    }
}

/// Unpacks a verified artifact into an install directory
pub struct ArtifactExtractor {
    dest_dir: PathBuf,
}

impl ArtifactExtractor {
    pub fn new(dest_dir: PathBuf) -> Self {
        Self { dest_dir }
    }

    /// Extract (or copy) `artifact` into the destination directory.
    /// Returns the destination directory.
    pub fn extract(&self, artifact: &Path) -> BuildpackResult<PathBuf> {
        let file_name = artifact
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                BuildpackError::Path(format!("Invalid artifact path: {}", artifact.display()))
            })?;

        ensure_dir(&self.dest_dir)?;

        match ArchiveFormat::from_file_name(file_name) {
            ArchiveFormat::TarGz => self.extract_targz(artifact)?,
            ArchiveFormat::Zip => self.extract_zip(artifact)?,
            ArchiveFormat::Plain => {
                fs::copy(artifact, self.dest_dir.join(file_name))?;
            }
        }

        Ok(self.dest_dir.clone())
    }

    fn extract_targz(&self, archive_path: &Path) -> BuildpackResult<()> {
        let file = File::open(archive_path)?;
        let decoder = GzDecoder::new(file);
        let mut archive = Archive::new(decoder);

        archive.unpack(&self.dest_dir).map_err(|e| {
            BuildpackError::Archive(format!(
                "Failed to extract {}: {}",
                archive_path.display(),
                e
            ))
        })
    }

    fn extract_zip(&self, archive_path: &Path) -> BuildpackResult<()> {
        use zip::ZipArchive;

        let file = File::open(archive_path)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| BuildpackError::Archive(format!("Invalid zip: {}", e)))?;

        archive
            .extract(&self.dest_dir)
            .map_err(|e| BuildpackError::Archive(format!("Extract failed: {}", e)))
    }
}
