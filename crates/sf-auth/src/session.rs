//! The org session: bearer token plus instance URL.
//!
//! Sessions implement a custom Debug that redacts the token.

use sf_explorer_client::{SalesforceClient, SfHttpClient, DEFAULT_API_VERSION};

use crate::cli::OrgDisplay;
use crate::error::{Error, ErrorKind, Result};

/// An authenticated connection to one org.
///
/// The access token is redacted in Debug output to prevent accidental
/// exposure in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Session {
    /// Create a session from its parts.
    pub fn new(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: api_version.into(),
        }
    }

    /// Build a session from `sf org display` output.
    ///
    /// `api_version` overrides the version reported by the CLI; when neither
    /// is present the client default is used.
    pub fn from_org_display(org: &OrgDisplay, api_version: Option<&str>) -> Result<Self> {
        if org.access_token.is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "empty accessToken in org display output".to_string(),
            )));
        }

        let parsed = url::Url::parse(&org.instance_url).map_err(|e| {
            Error::with_source(
                ErrorKind::InvalidCredentials(format!("instanceUrl is not a URL: {e}")),
                e,
            )
        })?;
        if !matches!(parsed.scheme(), "https" | "http") {
            return Err(Error::new(ErrorKind::InvalidCredentials(format!(
                "unsupported instanceUrl scheme: {}",
                parsed.scheme()
            ))));
        }

        let version = api_version
            .or(org.api_version.as_deref())
            .unwrap_or(DEFAULT_API_VERSION);

        Ok(Self::new(&org.instance_url, &org.access_token, version))
    }

    /// Get the Salesforce instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version (e.g., "62.0").
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Bind this session to an HTTP client, sharing its connection pool.
    pub fn client(&self, http: &SfHttpClient) -> SalesforceClient {
        SalesforceClient::with_http(http.clone(), &self.instance_url, &self.access_token)
            .with_api_version(&self.api_version)
    }
}
