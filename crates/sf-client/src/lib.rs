//! # sf-explorer-client
//!
//! Core HTTP client infrastructure for the Salesforce object explorer.
//!
//! This crate provides the foundational HTTP client with:
//! - Bearer-token authentication
//! - Bounded request and connect timeouts
//! - Compression support (gzip, deflate)
//! - Mapping of non-success responses to errors carrying status and body
//! - Request/response tracing
//!
//! There is no automatic retry: a failed call surfaces immediately and the
//! caller decides what to do with it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (sf-auth session probe, sf-rest metadata + query)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SalesforceClient                          │
//! │  - Holds instance URL + access token + API version          │
//! │  - Provides typed JSON methods (get_json, rest_get, query)  │
//! │  - Handles authentication headers                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - Raw HTTP with timeouts and compression                   │
//! │  - Response status checking                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sf_explorer_client::SalesforceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sf_explorer_client::Error> {
//!     let client = SalesforceClient::new("https://myorg.my.salesforce.com", "token")?;
//!
//!     let user: serde_json::Value = client
//!         .get_json("/services/oauth2/userinfo")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod salesforce_client;
pub mod security;

pub use client::SfHttpClient;
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{sanitize_error_message, Response, ResponseExt};
pub use salesforce_client::{QueryResult, SalesforceClient};

/// Default Salesforce API version
pub const DEFAULT_API_VERSION: &str = "62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sf-object-explorer/", env!("CARGO_PKG_VERSION"));
