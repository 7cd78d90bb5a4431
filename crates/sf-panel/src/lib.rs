//! # sf-explorer-panel
//!
//! The object explorer panel, independent of any particular host.
//!
//! A host creates an [`Explorer`], hands it to a [`PanelController`]
//! together with the sending half of an [`OutboundMessage`] channel, and
//! feeds [`PanelEvent`]s into [`PanelController::run`]. The controller loads
//! the object list when the panel opens, reloads it when the panel comes
//! back into view, and answers view commands with notifications.
//!
//! ```text
//! host ──PanelEvent──▶ PanelController ──▶ Explorer ──▶ SessionManager (sf CLI)
//!   ▲                        │                  └─────▶ ExplorerRestClient (org)
//!   └────OutboundMessage─────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sf_explorer_auth::StaticPrompt;
//! use sf_explorer_panel::{Explorer, ExplorerConfig, PanelController};
//! use tokio::sync::mpsc;
//!
//! let config = ExplorerConfig::from_env()?;
//! let explorer = Explorer::from_config(&config, Arc::new(StaticPrompt(config.auto_login)))?;
//!
//! let (view_tx, mut view_rx) = mpsc::unbounded_channel();
//! let (events_tx, events_rx) = mpsc::unbounded_channel();
//! tokio::spawn(PanelController::new(explorer, view_tx).run(events_rx));
//! ```

mod config;
mod controller;
mod error;
mod explorer;
mod message;
#[cfg(test)]
mod test_support;

pub use config::ExplorerConfig;
pub use controller::{PanelController, PanelEvent, PanelState};
pub use error::{Error, ErrorKind, Result};
pub use explorer::{Explorer, UserOrgInfo, UNKNOWN_ORG, UNKNOWN_USER};
pub use message::{HostMessage, InboundCommand, LifecycleEvent, OutboundMessage};
