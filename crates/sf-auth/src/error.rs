//! Error types for sf-explorer-auth.
//!
//! Error messages are designed to avoid exposing sensitive credential data.

/// Result type alias for sf-explorer-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-explorer-auth operations.
///
/// Error messages are sanitized to prevent accidental credential exposure.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the Salesforce CLI is not installed.
    pub fn is_tooling_absent(&self) -> bool {
        matches!(self.kind, ErrorKind::ToolingAbsent(_))
    }

    /// Returns true if the user has to authenticate before anything can proceed.
    pub fn is_authentication_required(&self) -> bool {
        matches!(self.kind, ErrorKind::AuthenticationRequired(_))
    }
}

/// The kind of error that occurred.
///
/// Error messages avoid including credential values.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The `sf` executable could not be started.
    #[error("Salesforce CLI not found: {0}")]
    ToolingAbsent(String),

    /// No usable session and the user declined or failed to log in.
    #[error("Salesforce authentication required: {0}")]
    AuthenticationRequired(String),

    /// The org rejected a freshly obtained token.
    #[error("Token invalid: {0}")]
    TokenInvalid(String),

    /// The CLI ran but reported a failure or produced unusable output.
    #[error("SFDX CLI error: {0}")]
    SfdxCli(String),

    /// A CLI invocation exceeded its time budget.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Invalid credentials in the CLI output.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// HTTP error while probing the session.
    #[error("HTTP error: {0}")]
    Http(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(ErrorKind::Io(err.to_string()), err)
    }
}

impl From<sf_explorer_client::Error> for Error {
    fn from(err: sf_explorer_client::Error) -> Self {
        // Sanitize any potential credential exposure
        let message = err.to_string();
        let sanitized = if message.contains("Bearer") || message.contains("token=") {
            "Client error (details redacted for security)".to_string()
        } else {
            message
        };
        Error::with_source(ErrorKind::Http(sanitized), err)
    }
}
