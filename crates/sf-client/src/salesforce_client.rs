//! An org-bound client: instance URL, access token and API version on top
//! of a shared [`SfHttpClient`].
//!
//! Covers exactly the calls the explorer makes: REST GETs, paged SOQL, the
//! session probe and raw Metadata API SOAP posts.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Sensitive parameters are skipped in tracing spans

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::client::SfHttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::RequestBuilder;
use crate::DEFAULT_API_VERSION;

/// Client for one org session. Cheap to clone; clones share the pool.
///
/// # Example
///
/// ```rust,ignore
/// use sf_explorer_client::SalesforceClient;
///
/// let client = SalesforceClient::new("https://na1.salesforce.com", "token")?;
/// let catalog: serde_json::Value = client.rest_get("sobjects").await?;
/// ```
#[derive(Clone)]
pub struct SalesforceClient {
    http: SfHttpClient,
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for SalesforceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceClient")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl SalesforceClient {
    /// Create a new Salesforce client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, access_token, ClientConfig::default())
    }

    /// Create a new Salesforce client with custom configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = SfHttpClient::new(config)?;
        Ok(Self::with_http(http, instance_url, access_token))
    }

    /// Create a client that shares an existing connection pool.
    pub fn with_http(
        http: SfHttpClient,
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Set the API version (e.g., "62.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build the full URL for a path.
    ///
    /// If the path starts with `/`, it's appended to the instance URL.
    /// Otherwise, it's assumed to be a full URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.instance_url, path)
        } else {
            format!("{}/{}", self.instance_url, path)
        }
    }

    /// Build the REST API URL for a path.
    ///
    /// Example: `rest_url("sobjects/Account")` -> `/services/data/v62.0/sobjects/Account`
    pub fn rest_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/services/data/v{}/{}",
            self.instance_url, self.api_version, path
        )
    }

    /// Build the Metadata API URL (SOAP endpoint).
    pub fn metadata_url(&self) -> String {
        format!("{}/services/Soap/m/{}", self.instance_url, self.api_version)
    }

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(&self.access_token)
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).bearer_auth(&self.access_token)
    }

    /// GET request with JSON response deserialization.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let full_url = self.url(url);
        let request = self.get(&full_url);
        let response = self.http.execute(request).await?;
        response.json().await
    }

    /// GET request to REST API with JSON response.
    pub async fn rest_get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_json(&self.rest_url(path)).await
    }

    /// Returns true if the org accepts the current token.
    ///
    /// Issues a GET against the versioned REST root, which lists the
    /// available resources and is the cheapest authenticated call.
    #[instrument(skip(self), fields(instance_url = %self.instance_url))]
    pub async fn probe(&self) -> Result<bool> {
        let request = self.get(&self.rest_url(""));
        let response = self.http.execute_raw(request).await?;
        Ok(response.is_success())
    }

    /// Execute a SOQL query via REST API (first page only).
    pub async fn query<T: DeserializeOwned>(&self, soql: &str) -> Result<QueryResult<T>> {
        let encoded = crate::security::url::encode_param(soql);
        let url = format!(
            "{}/services/data/v{}/query?q={}",
            self.instance_url, self.api_version, encoded
        );
        self.get_json(&url).await
    }

    /// Fetch the next page of a query using its `nextRecordsUrl`.
    pub async fn query_more<T: DeserializeOwned>(
        &self,
        next_records_url: &str,
    ) -> Result<QueryResult<T>> {
        self.get_json(next_records_url).await
    }

    /// POST a SOAP envelope to the Metadata API and return the body text.
    ///
    /// SOAP faults come back as HTTP 500 with a fault envelope, so the body is
    /// returned regardless of status for the caller to inspect.
    #[instrument(skip(self, envelope))]
    pub async fn metadata_call(&self, soap_action: &str, envelope: String) -> Result<(u16, String)> {
        let request = self
            .post(&self.metadata_url())
            .header("SOAPAction", soap_action)
            .xml(envelope);
        let response = self.http.execute_raw(request).await?;
        let status = response.status();
        Ok((status, response.text().await?))
    }
}

/// Result of a SOQL query.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct QueryResult<T> {
    /// Total number of records matching the query.
    #[serde(rename = "totalSize")]
    pub total_size: u64,

    /// Whether all records are returned (no more pages).
    pub done: bool,

    /// URL to fetch next batch of results.
    #[serde(rename = "nextRecordsUrl")]
    pub next_records_url: Option<String>,

    /// The records.
    pub records: Vec<T>,
}
