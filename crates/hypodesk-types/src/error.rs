use std::fmt;

/// Result type for hypodesk-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A status label did not match any known topic status
    UnknownStatus(String),

    /// A role label did not match any known role
    UnknownRole(String),

    /// A value did not match any option of a fixed choice list
    UnknownOption { kind: &'static str, value: String },

    /// A date string could not be interpreted
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownStatus(s) => write!(f, "Unknown status: {}", s),
            Error::UnknownRole(s) => write!(f, "Unknown role: {}", s),
            Error::UnknownOption { kind, value } => write!(f, "Unknown {}: {}", kind, value),
            Error::InvalidDate(s) => write!(f, "Invalid date: {}", s),
        }
    }
}

impl std::error::Error for Error {}
