//! HTTP response handling with Salesforce-specific extensions.

use std::sync::LazyLock;

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        let status = self.status();
        (200..300).contains(&status)
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        // Read as bytes first so a schema mismatch reports the serde error
        // rather than an opaque decode failure.
        let bytes = self.inner.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

/// Extension trait for processing Salesforce API responses.
pub trait ResponseExt {
    /// Turn a non-success response into an error carrying status and body text.
    fn check_status(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_status(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let status = self.status();
        let body = self.text().await.unwrap_or_default();
        Err(Error::new(ErrorKind::Http {
            status,
            body: sanitize_error_message(&body),
        }))
    }
}

static TOKEN_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"00[A-Za-z0-9]{13,}[!][A-Za-z0-9_.]+").expect("token pattern compiles")
});

static SESSION_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"sid=[A-Za-z0-9]{20,}").expect("session pattern compiles")
});

/// Sanitize an error body before it is surfaced to the user.
///
/// This function:
/// - Truncates messages longer than 500 characters
/// - Removes potential tokens (anything that looks like an access token)
/// - Removes potential session IDs
pub fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    // Salesforce tokens start with the org id ("00D...") followed by '!'
    let mut sanitized = TOKEN_PATTERN
        .replace_all(message, "[REDACTED_TOKEN]")
        .to_string();

    sanitized = SESSION_PATTERN
        .replace_all(&sanitized, "sid=[REDACTED]")
        .to_string();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
