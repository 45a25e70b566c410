use std::fmt;

/// Result type for descarga-ingest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while ingesting an inventory file
#[derive(Debug)]
pub enum Error {
    /// The file parsed but does not form a usable inventory
    Validation(String),

    /// CSV parsing failed
    Csv(csv::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(_) => None,
            Error::Csv(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
