//! Asking the user whether to start an interactive login.

use async_trait::async_trait;

/// Question shown when no usable org session exists.
pub const LOGIN_QUESTION: &str = "No authenticated Salesforce org found. Authenticate now?";

/// Host hook for the login confirmation.
///
/// An IDE host shows a modal, the stdio bridge answers from configuration.
#[async_trait]
pub trait LoginPrompt: Send + Sync {
    /// Return true to run `sf org login web`.
    async fn confirm_login(&self, question: &str) -> bool;
}

/// A prompt with a fixed answer, for non-interactive hosts.
#[derive(Debug, Clone, Copy)]
pub struct StaticPrompt(pub bool);

#[async_trait]
impl LoginPrompt for StaticPrompt {
    async fn confirm_login(&self, _question: &str) -> bool {
        self.0
    }
}
