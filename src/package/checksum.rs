use crate::core::{BuildpackError, BuildpackResult};
use md5::{Digest, Md5};
use std::fs::File;
use std::io;
use std::path::Path;

/// MD5 digest of a file's contents, lowercase hex.
///
/// The file is streamed through the hasher rather than read into memory.
pub fn md5_hex(path: &Path) -> BuildpackResult<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Check a file against the manifest-declared digest.
///
/// Comparison is exact string equality; an uppercase `expected` never matches.
pub fn verify_md5(path: &Path, expected: &str) -> BuildpackResult<()> {
    let actual = md5_hex(path)?;
    if actual != expected {
        return Err(BuildpackError::Integrity {
            expected: expected.to_string(),
            actual,
            cleanup: None,
        });
    }
    Ok(())
}
