use std::fmt;
use std::io;

/// Failure to read or write a profile
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    /// The profile exists but is not valid JSON for a [`crate::Profile`]
    Format(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "profile I/O failed: {e}"),
            StoreError::Format(e) => write!(f, "profile is malformed: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Format(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Format(e)
    }
}
