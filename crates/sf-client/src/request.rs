//! HTTP request building with Salesforce-specific headers.

use std::collections::HashMap;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Builder for HTTP requests with Salesforce-specific options.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<String>,
    pub(crate) bearer_token: Option<String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            bearer_token: None,
        }
    }

    /// Set the bearer token for authentication.
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set an XML body (SOAP envelopes for the Metadata API).
    pub fn xml(mut self, data: impl Into<String>) -> Self {
        self.body = Some(data.into());
        self.headers.insert(
            "Content-Type".to_string(),
            "text/xml;charset=UTF-8".to_string(),
        );
        self
    }

    /// Get the HTTP method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// Get the target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}
