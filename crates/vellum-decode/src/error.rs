use std::fmt;

/// Result type for vellum-decode operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding a component document
#[derive(Debug)]
pub enum Error {
    /// Document bytes are not valid JSON
    Json(serde_json::Error),

    /// Node is not a JSON object
    NotAnObject,

    /// The `type` discriminator names no known variant
    UnknownType(String),

    /// A declared field holds a value of the wrong JSON type
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// A required field is absent
    MissingField(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "Malformed document: {}", err),
            Error::NotAnObject => write!(f, "Component node must be a JSON object"),
            Error::UnknownType(raw) => write!(f, "Unknown component type: {}", raw),
            Error::TypeMismatch { field, expected } => {
                write!(f, "Field '{}' must be {}", field, expected)
            }
            Error::MissingField(field) => write!(f, "Missing required field '{}'", field),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
