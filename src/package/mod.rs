pub mod checksum;
pub mod extractor;
pub mod resolver;
pub mod transport;

pub use checksum::{md5_hex, verify_md5};
pub use extractor::{ArchiveFormat, ArtifactExtractor};
pub use resolver::DependencyResolver;
pub use transport::ArtifactTransport;
