use std::fmt;

/// Result type for descarga-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by the session/engine layer
#[derive(Debug)]
pub enum Error {
    /// Inventory data was malformed or incomplete
    Validation(String),

    /// Operation invoked out of sequence (e.g. scanning before a run starts)
    State(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::State(msg) => write!(f, "State error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
