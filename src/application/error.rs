//! Failures at the request-processing boundary.

use thiserror::Error;

/// Any error a request processor may raise.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reported to the transport layer for everything except I/O.
///
/// When it wraps a foreign failure, that failure is kept as `source()`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    cause: Option<BoxError>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Wrap `cause`, reusing its message.
    pub fn wrap(cause: BoxError) -> Self {
        Self {
            message: cause.to_string(),
            cause: Some(cause),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// What a [`RequestProcessor`](crate::application::RequestProcessor) returns.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("{0}")]
    Other(#[from] BoxError),
}

impl ProcessError {
    /// Box any error as [`ProcessError::Other`].
    pub fn other(error: impl Into<BoxError>) -> Self {
        ProcessError::Other(error.into())
    }
}

/// What leaves [`Application::run`](crate::application::Application::run).
#[derive(Debug, Error)]
pub enum RunError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

impl From<ProcessError> for RunError {
    fn from(error: ProcessError) -> Self {
        match error {
            ProcessError::Io(e) => RunError::Io(e),
            ProcessError::Transport(e) => RunError::Transport(e),
            ProcessError::Other(cause) => RunError::Transport(TransportError::wrap(cause)),
        }
    }
}
