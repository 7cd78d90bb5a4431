//! # sf-explorer-auth
//!
//! Org sessions for the Salesforce object explorer.
//!
//! Credentials are borrowed from the Salesforce CLI rather than obtained
//! through an OAuth flow of our own: `sf org display --json` yields the
//! access token and instance URL of an already-authenticated org, and
//! `sf org login web` fixes a missing or expired login.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sf_explorer_auth::{CliConfig, SessionManager, SfCli, StaticPrompt};
//! use sf_explorer_client::SfHttpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sf_explorer_auth::Error> {
//!     let cli = SfCli::new(CliConfig::default().with_target_org("myorg"));
//!     let sessions = SessionManager::new(
//!         Arc::new(cli),
//!         Arc::new(StaticPrompt(false)),
//!         SfHttpClient::default_client()?,
//!     );
//!
//!     // Probes the cached session, re-running the CLI only when it fails.
//!     let session = sessions.session().await?;
//!     println!("connected to {}", session.instance_url());
//!     Ok(())
//! }
//! ```

mod cli;
mod error;
mod manager;
mod prompt;
mod session;

pub use cli::{parse_org_display, CliConfig, OrgCli, OrgDisplay, SfCli};
pub use error::{Error, ErrorKind, Result};
pub use manager::SessionManager;
pub use prompt::{LoginPrompt, StaticPrompt, LOGIN_QUESTION};
pub use session::Session;

/// Default Salesforce login URL for production.
pub const PRODUCTION_LOGIN_URL: &str = "https://login.salesforce.com";

/// Default Salesforce login URL for sandbox.
pub const SANDBOX_LOGIN_URL: &str = "https://test.salesforce.com";
