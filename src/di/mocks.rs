//! Mock implementations of service traits for testing

use super::traits::Transport;
use crate::core::path::ensure_dir;
use crate::core::{BuildpackError, BuildpackResult};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock transport for testing
///
/// Serves downloads from in-memory bodies and records every call, so tests
/// can assert whether the network was touched. Local copies go to the real
/// file system.
#[derive(Clone, Default)]
pub struct MockTransport {
    remote: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    downloads: Arc<Mutex<Vec<String>>>,
    copies: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Create a new mock transport with no remote files
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for GETs of `uri`
    pub fn add_remote(&self, uri: &str, body: Vec<u8>) {
        self.remote.lock().unwrap().insert(uri.to_string(), body);
    }

    /// URIs downloaded so far, in call order
    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }

    /// Source paths copied so far, in call order
    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn copy_file(&self, source: &Path, dest: &Path) -> BuildpackResult<u64> {
        self.copies
            .lock()
            .unwrap()
            .push(source.display().to_string());

        let data = fs::read(source)?;
        if let Some(parent) = dest.parent() {
            ensure_dir(parent)?;
        }
        fs::write(dest, &data)?;
        Ok(data.len() as u64)
    }

    fn download(&self, uri: &str, dest: &Path) -> BuildpackResult<u64> {
        self.downloads.lock().unwrap().push(uri.to_string());

        let data = self
            .remote
            .lock()
            .unwrap()
            .get(uri)
            .cloned()
            .ok_or_else(|| BuildpackError::HttpStatus {
                uri: uri.to_string(),
                status: 404,
            })?;
        if let Some(parent) = dest.parent() {
            ensure_dir(parent)?;
        }
        fs::write(dest, &data)?;
        Ok(data.len() as u64)
    }
}
