use std::fmt;

/// Result type for hypodesk-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// The request never completed (connection refused, timeout, ...)
    Transport(String),

    /// The service answered with a non-2xx status
    Api { status: u16, message: String },

    /// Input rejected before any request was issued
    Validation(String),

    /// The same kind of mutation is already in flight
    Busy(String),

    /// A protected operation was attempted without a session
    NotAuthenticated,

    /// A response body could not be interpreted
    Decode(String),

    /// Requested record or user does not exist
    NotFound(String),

    /// Domain conversion failed
    Types(hypodesk_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl Error {
    /// Text suitable for an inline status line.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            Error::Validation(msg) | Error::NotFound(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(msg) => write!(f, "Request failed: {}", msg),
            Error::Api { status, message } => write!(f, "HTTP {}: {}", status, message),
            Error::Validation(msg) => write!(f, "Invalid input: {}", msg),
            Error::Busy(action) => write!(f, "{} is already in progress", action),
            Error::NotAuthenticated => write!(f, "Not logged in. Run 'hypodesk login' first"),
            Error::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<hypodesk_types::Error> for Error {
    fn from(err: hypodesk_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
