use crate::cache::filter_uri;
use crate::config::Config;
use crate::core::path::ensure_dir;
use crate::core::{BuildpackError, BuildpackResult};
use crate::di::Transport;
use reqwest::blocking::Client;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Production [`Transport`]: local file copies and blocking HTTP GETs
pub struct ArtifactTransport {
    client: Client,
    reject_http_errors: bool,
}

impl ArtifactTransport {
    pub fn new(config: &Config) -> BuildpackResult<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self {
            client,
            reject_http_errors: config.reject_http_errors,
        })
    }
}

impl Transport for ArtifactTransport {
    fn copy_file(&self, source: &Path, dest: &Path) -> BuildpackResult<u64> {
        let mut file = File::open(source)?;
        write_to_file(&mut file, dest, BuildpackError::Io)
    }

    fn download(&self, uri: &str, dest: &Path) -> BuildpackResult<u64> {
        // reqwest errors carry the full URL, which may hold credentials
        let mut response = self
            .client
            .get(uri)
            .send()
            .map_err(|e| BuildpackError::Network(e.without_url()))?;

        let filtered = filter_uri(uri)?;
        let status = response.status();
        debug!(status = status.as_u16(), path = %dest.display(), "Dependency response received");
        if self.reject_http_errors && !status.is_success() {
            return Err(BuildpackError::HttpStatus {
                uri: filtered,
                status: status.as_u16(),
            });
        }

        write_to_file(&mut response, dest, |source| BuildpackError::Download {
            uri: filtered,
            source,
        })
    }
}

/// Stream `source` into a freshly created `dest`.
///
/// Errors reading `source` go through `on_read_error`; errors writing
/// `dest` stay I/O errors. If the copy fails after `dest` was created, the
/// partial file is removed before the error is returned.
fn write_to_file<R, F>(source: &mut R, dest: &Path, on_read_error: F) -> BuildpackResult<u64>
where
    R: Read,
    F: FnOnce(io::Error) -> BuildpackError,
{
    if let Some(parent) = dest.parent() {
        ensure_dir(parent)?;
    }

    let mut file = File::create(dest)?;
    let mut reader = TrackedReader {
        inner: source,
        failed: false,
    };
    match io::copy(&mut reader, &mut file) {
        Ok(written) => Ok(written),
        Err(e) => {
            drop(file);
            if let Err(cleanup) = fs::remove_file(dest) {
                warn!(path = %dest.display(), error = %cleanup, "Failed to remove partial file");
            }
            if reader.failed {
                Err(on_read_error(e))
            } else {
                Err(e.into())
            }
        }
    }
}

/// Remembers whether an error came from the source side of a copy
struct TrackedReader<'a, R> {
    inner: &'a mut R,
    failed: bool,
}

impl<R: Read> Read for TrackedReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).inspect_err(|e| {
            if e.kind() != io::ErrorKind::Interrupted {
                self.failed = true;
            }
        })
    }
}
