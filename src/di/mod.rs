//! Trait seams for the I/O the resolver performs
//!
//! The resolver talks to disk and network only through [`Transport`], so
//! tests can swap in [`mocks::MockTransport`] and observe which source a
//! fetch used.
//!
//! # Example (Testing)
//! ```
//! use buildpack::di::mocks::MockTransport;
//! use buildpack::di::Transport;
//! use std::path::Path;
//!
//! let transport = MockTransport::new();
//! transport.add_remote("https://example.com/dep.tgz", b"bytes".to_vec());
//!
//! let dir = tempfile::tempdir().unwrap();
//! transport
//!     .download("https://example.com/dep.tgz", &dir.path().join("dep.tgz"))
//!     .unwrap();
//! assert_eq!(transport.downloads(), vec!["https://example.com/dep.tgz".to_string()]);
//! ```

pub mod mocks;
pub mod traits;

pub use traits::Transport;
