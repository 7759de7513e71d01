use std::fmt;

/// Result type for vellum-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the fetch collaborator.
#[derive(Debug)]
pub enum FetchError {
    /// Transport failed; retryable by re-invoking the load
    Network(String),
    /// The document path names nothing
    NotFound(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::NotFound(path) => write!(f, "Document not found: {}", path),
        }
    }
}

impl std::error::Error for FetchError {}

/// Error types that can occur in the load pipeline.
///
/// Decode failures are not retried automatically — retrying reproduces the
/// same malformed payload. A missing screen is kept distinct from both so the
/// host can render a not-found affordance instead of a generic failure.
#[derive(Debug)]
pub enum Error {
    /// Fetch collaborator failed
    Fetch(FetchError),

    /// Document decoded to no valid component tree
    Decode(vellum_decode::Error),

    /// Resolver found no screen with the requested id
    ScreenNotFound(String),

    /// Configuration file error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch(err) => write!(f, "{}", err),
            Error::Decode(err) => write!(f, "Decode error: {}", err),
            Error::ScreenNotFound(id) => write!(f, "Screen not found for ID: {}", id),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fetch(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::ScreenNotFound(_) | Error::Config(_) => None,
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<vellum_decode::Error> for Error {
    fn from(err: vellum_decode::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
