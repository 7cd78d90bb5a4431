//! The OpenID Connect `userinfo` response.

use serde::Deserialize;

/// Subset of `GET /services/oauth2/userinfo`.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub preferred_username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
}
