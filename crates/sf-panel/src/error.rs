//! Error types for sf-explorer-panel.
//!
//! Lower-layer errors are folded into the four categories the view cares
//! about, keeping the original message text.

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

    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidInput(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The Salesforce CLI is not installed.
    #[error("{0}")]
    ToolingAbsent(String),

    /// No valid session and no successful login.
    #[error("{0}")]
    AuthenticationRequired(String),

    /// Any other failure while obtaining a session.
    #[error("{0}")]
    Auth(String),

    /// Rejected before any network call.
    #[error("{0}")]
    InvalidInput(String),

    /// The org answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Any other failure talking to the org.
    #[error("{0}")]
    Rest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<sf_explorer_auth::Error> for Error {
    fn from(err: sf_explorer_auth::Error) -> Self {
        let message = err.to_string();
        let kind = match err.kind {
            sf_explorer_auth::ErrorKind::ToolingAbsent(_) => ErrorKind::ToolingAbsent(message),
            sf_explorer_auth::ErrorKind::AuthenticationRequired(_) => {
                ErrorKind::AuthenticationRequired(message)
            }
            _ => ErrorKind::Auth(message),
        };
        Error {
            kind,
            source: Some(Box::new(err)),
        }
    }
}

impl From<sf_explorer_rest::Error> for Error {
    fn from(err: sf_explorer_rest::Error) -> Self {
        let message = err.to_string();
        let kind = match err.kind {
            sf_explorer_rest::ErrorKind::InvalidInput(_) => ErrorKind::InvalidInput(message),
            sf_explorer_rest::ErrorKind::Http { status, .. } => ErrorKind::Http { status, message },
            _ => ErrorKind::Rest(message),
        };
        Error {
            kind,
            source: Some(Box::new(err)),
        }
    }
}

impl From<sf_explorer_client::Error> for Error {
    fn from(err: sf_explorer_client::Error) -> Self {
        Error {
            kind: ErrorKind::Config(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
