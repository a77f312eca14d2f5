use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum TeaCastError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}")]
    Status {
        status: StatusCode,
        /// Decoded error body, when the server sent JSON.
        body: Option<serde_json::Value>,
    },

    #[error("Unexpected response shape: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Coarse classification used by callers that only care about the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or non-2xx status.
    Transport,
    /// Decoded body lacks the expected top-level field.
    Validation,
    /// Body could not be decoded into the typed shape.
    Decode,
    Io,
    InvalidArgument,
}

impl TeaCastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TeaCastError::Http(_) | TeaCastError::Status { .. } => ErrorKind::Transport,
            TeaCastError::Validation(_) => ErrorKind::Validation,
            TeaCastError::Json(_) => ErrorKind::Decode,
            TeaCastError::Io(_) => ErrorKind::Io,
            TeaCastError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// HTTP status for `Status` errors, or for reqwest errors that carry one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TeaCastError::Status { status, .. } => Some(*status),
            TeaCastError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Server-provided `message` from a non-2xx JSON body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TeaCastError::Status { body: Some(body), .. } => {
                body.get("message").and_then(|m| m.as_str())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TeaCastError>;
