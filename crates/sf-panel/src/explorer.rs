//! The explorer facade: one session cache plus one REST client.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sf_explorer_auth::{LoginPrompt, OrgCli, Session, SessionManager, SfCli};
use sf_explorer_client::SfHttpClient;
use sf_explorer_rest::{ExplorerRestClient, ObjectMetadata, ObjectName, ObjectSummary, ReadQuery};
use tracing::{instrument, warn};

use crate::config::ExplorerConfig;
use crate::error::Result;

pub const UNKNOWN_USER: &str = "Unknown User";
pub const UNKNOWN_ORG: &str = "Unknown Org";

/// Who is logged in, and to which org.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOrgInfo {
    pub user_name: String,
    pub org_name: String,
}

impl UserOrgInfo {
    pub fn unknown() -> Self {
        Self {
            user_name: UNKNOWN_USER.to_string(),
            org_name: UNKNOWN_ORG.to_string(),
        }
    }
}

/// Every public operation validates its input, then obtains a session, then
/// calls the org.
#[derive(Debug)]
pub struct Explorer {
    sessions: SessionManager,
    rest: ExplorerRestClient,
}

impl Explorer {
    pub fn new(sessions: SessionManager, rest: ExplorerRestClient) -> Self {
        Self { sessions, rest }
    }

    /// Build an explorer that talks to the real `sf` executable.
    pub fn from_config(config: &ExplorerConfig, prompt: Arc<dyn LoginPrompt>) -> Result<Self> {
        Self::with_cli(config, Arc::new(SfCli::new(config.cli.clone())), prompt)
    }

    /// Build an explorer around any [`OrgCli`].
    pub fn with_cli(
        config: &ExplorerConfig,
        cli: Arc<dyn OrgCli>,
        prompt: Arc<dyn LoginPrompt>,
    ) -> Result<Self> {
        let http = SfHttpClient::new(config.client.clone())?;

        let mut sessions = SessionManager::new(cli, prompt, http.clone());
        if let Some(ref version) = config.api_version {
            sessions = sessions.with_api_version(version);
        }
        let rest = ExplorerRestClient::new(http).with_row_limit(config.query_row_limit);

        Ok(Self::new(sessions, rest))
    }

    #[instrument(skip(self))]
    pub async fn list_objects(&self) -> Result<Vec<ObjectSummary>> {
        let session = self.sessions.session().await?;
        Ok(self.rest.list_objects(&session).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_object_metadata(&self, object_name: &str) -> Result<ObjectMetadata> {
        let object = ObjectName::parse(object_name)?;
        let session = self.sessions.session().await?;
        Ok(self.rest.get_object_metadata(&session, &object).await?)
    }

    #[instrument(skip(self))]
    pub async fn run_query(&self, query: &str) -> Result<Vec<Value>> {
        let query = ReadQuery::parse(query)?;
        let session = self.sessions.session().await?;
        Ok(self.rest.run_query(&session, &query).await?)
    }

    /// Object list and header names for one panel load.
    ///
    /// Both fetches share a single session, so a declined or failed login
    /// is asked for once. Only the object list can fail the load.
    #[instrument(skip(self))]
    pub async fn load_panel(&self) -> Result<(Vec<ObjectSummary>, UserOrgInfo)> {
        let session = self.sessions.session().await?;
        let (objects, info) = tokio::join!(
            self.rest.list_objects(&session),
            self.user_and_org_info_for(&session)
        );
        Ok((objects?, info))
    }

    /// User and org names for the panel header.
    ///
    /// Never fails: any error is logged and reported as
    /// `Unknown User` / `Unknown Org`.
    pub async fn get_user_and_org_info(&self) -> UserOrgInfo {
        match self.sessions.session().await {
            Ok(session) => self.user_and_org_info_for(&session).await,
            Err(e) => {
                warn!(error = %e, "No session for user and org, showing placeholders");
                UserOrgInfo::unknown()
            }
        }
    }

    async fn user_and_org_info_for(&self, session: &Session) -> UserOrgInfo {
        match self.try_user_and_org_info(session).await {
            Ok(info) => info,
            Err(e) => {
                warn!(error = %e, "Could not resolve user and org, showing placeholders");
                UserOrgInfo::unknown()
            }
        }
    }

    async fn try_user_and_org_info(&self, session: &Session) -> Result<UserOrgInfo> {
        let identity = self.rest.identity(session).await?;
        let org = self.sessions.org_info().await?;

        Ok(UserOrgInfo {
            user_name: identity.preferred_username,
            org_name: org.org_name().unwrap_or(UNKNOWN_ORG).to_string(),
        })
    }

    /// Forget the cached session so the next call starts from the CLI.
    pub async fn reset_session(&self) {
        self.sessions.invalidate().await;
    }
}
