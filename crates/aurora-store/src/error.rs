use std::fmt;

use aurora_types::ValidationError;

/// Result type for aurora-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the storage layer
///
/// A missing or corrupt blob is not an error: the repository reseeds instead.
#[derive(Debug)]
pub enum Error {
    /// Reading or writing the storage medium failed
    Io(std::io::Error),

    /// The collection could not be encoded
    Encoding(aurora_types::Error),

    /// A new record was rejected before anything was written
    Validation(ValidationError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "Storage IO error: {}", err),
            Error::Encoding(err) => write!(f, "Encoding error: {}", err),
            Error::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Encoding(err) => Some(err),
            Error::Validation(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<aurora_types::Error> for Error {
    fn from(err: aurora_types::Error) -> Self {
        Error::Encoding(err)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}
