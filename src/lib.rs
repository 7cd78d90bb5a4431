//! # sf-object-explorer
//!
//! Browse a Salesforce org's objects, their fields, relationships, record
//! types and page layouts, and run read-only SOQL, from any host that can
//! exchange JSON messages with a panel controller.
//!
//! ## Security
//!
//! - Credentials come from the Salesforce CLI and are never written anywhere
//! - Access tokens are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error bodies are sanitized before they reach the view
//!
//! ## Crates
//!
//! - **sf-explorer-client** - HTTP core: timeouts, compression, status and body error mapping
//! - **sf-explorer-auth** - Org sessions: `sf` CLI bootstrap, login prompt, probe-before-reuse cache
//! - **sf-explorer-rest** - Object catalog, normalized object metadata, read-only SOQL
//! - **sf-explorer-panel** - Explorer facade, view messages, panel lifecycle controller
//!
//! [`stdio::serve`] runs a panel over newline-delimited JSON, as the
//! `sf-object-explorer` binary does on stdin/stdout.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sf_object_explorer::auth::StaticPrompt;
//! use sf_object_explorer::panel::{Explorer, ExplorerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExplorerConfig::from_env()?;
//!     let explorer = Explorer::from_config(&config, Arc::new(StaticPrompt(false)))?;
//!
//!     for object in explorer.list_objects().await? {
//!         println!("{} ({})", object.label, object.api_name);
//!     }
//!
//!     let rows = explorer.run_query("SELECT Id, Name FROM Account LIMIT 10").await?;
//!     println!("{} rows", rows.len());
//!     Ok(())
//! }
//! ```

pub mod stdio;

// Re-export all crates for convenient access
pub use sf_explorer_auth as auth;
pub use sf_explorer_client as client;
pub use sf_explorer_panel as panel;
pub use sf_explorer_rest as rest;
