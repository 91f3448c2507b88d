use thiserror::Error;

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BackendError {
    /// A non-2xx response; `message` is whatever the server offered
    /// (its `error` field, the raw body, or `HTTP <status>`).
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
    },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(String),
    /// The owning fetch group was cancelled before the request finished.
    #[error("request aborted")]
    Aborted,
    #[error("unknown error")]
    Unknown,
}

impl BackendError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, BackendError::Aborted)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::Status { status: 404, .. })
    }

    /// Message to show inline for a failed mutation.  Server supplied
    /// messages are passed through; anything else uses `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            BackendError::Status { message, .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("unsupported value: {0}")]
    Unsupported(String),
}

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Please enter a keyword to filter.")]
    EmptyKeyword,
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    #[error("at least one {0} entry must remain")]
    LastEntry(&'static str),
    #[error(transparent)]
    Value(#[from] ValueError),
}
