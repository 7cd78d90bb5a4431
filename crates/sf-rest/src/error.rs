//! Error types for sf-explorer-rest.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Shorthand for an [`ErrorKind::InvalidInput`] error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput(message.into()))
    }

    /// Returns true if the input was rejected before any network call.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidInput(_))
    }

    /// HTTP status of a failed upstream call, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Http { status, .. } => Some(status),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Object name or query text rejected locally.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The org answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The Metadata API returned a SOAP fault.
    #[error("SOAP fault: {0}")]
    SoapFault(String),

    /// The response did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Client error: {0}")]
    Client(String),
}

impl From<sf_explorer_client::Error> for Error {
    fn from(err: sf_explorer_client::Error) -> Self {
        let kind = match err.kind {
            sf_explorer_client::ErrorKind::Http { status, ref body } => ErrorKind::Http {
                status,
                body: body.clone(),
            },
            sf_explorer_client::ErrorKind::Json(ref msg) => ErrorKind::InvalidResponse(msg.clone()),
            _ => ErrorKind::Client(err.to_string()),
        };
        Error {
            kind,
            source: Some(Box::new(err)),
        }
    }
}
