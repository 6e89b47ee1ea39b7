use thiserror::Error;

pub type BuildpackResult<T> = Result<T, BuildpackError>;

/// Machine-readable classification of a [`BuildpackError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Configuration,
    NotFound,
    Uri,
    Network,
    Integrity,
}

#[derive(Error, Debug)]
pub enum BuildpackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest parsing error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Missing or ambiguous operator configuration in the manifest.
    #[error("{message}")]
    Configuration { message: String, hint: &'static str },

    #[error("{message}")]
    NotFound { message: String, hint: &'static str },

    #[error("Invalid dependency URI '{uri}': {source}")]
    Uri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: GET {uri} returned status {status}")]
    HttpStatus { uri: String, status: u16 },

    /// The connection failed while the response body was being streamed.
    #[error("HTTP error: reading the body of {uri} failed: {source}")]
    Download {
        uri: String,
        #[source]
        source: std::io::Error,
    },

    /// The fetched bytes do not hash to the manifest-declared digest.
    ///
    /// `cleanup` holds the error from removing the bad output file, if that
    /// also failed.
    #[error("md5 mismatch: expected: {expected} got: {actual}")]
    Integrity {
        expected: String,
        actual: String,
        cleanup: Option<String>,
    },

    #[error("Unsupported stack: this buildpack does not support the {stack} stack")]
    UnsupportedStack { stack: String },

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Path error: {0}")]
    Path(String),

    /// Problems with the user's own config file, not the manifest.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BuildpackError {
    pub fn configuration(message: impl Into<String>, hint: &'static str) -> Self {
        BuildpackError::Configuration {
            message: message.into(),
            hint,
        }
    }

    pub fn not_found(message: impl Into<String>, hint: &'static str) -> Self {
        BuildpackError::NotFound {
            message: message.into(),
            hint,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BuildpackError::Io(_) | BuildpackError::Path(_) | BuildpackError::Archive(_) => {
                ErrorKind::Io
            }
            BuildpackError::Parse(_) => ErrorKind::Parse,
            BuildpackError::Configuration { .. }
            | BuildpackError::UnsupportedStack { .. }
            | BuildpackError::Config(_) => ErrorKind::Configuration,
            BuildpackError::NotFound { .. } => ErrorKind::NotFound,
            BuildpackError::Uri { .. } => ErrorKind::Uri,
            BuildpackError::Network(_)
            | BuildpackError::HttpStatus { .. }
            | BuildpackError::Download { .. } => ErrorKind::Network,
            BuildpackError::Integrity { .. } => ErrorKind::Integrity,
        }
    }
}
