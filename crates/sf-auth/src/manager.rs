//! Cached org session with probe-before-reuse.

use std::sync::Arc;

use sf_explorer_client::SfHttpClient;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::cli::{OrgCli, OrgDisplay};
use crate::error::{Error, ErrorKind, Result};
use crate::prompt::{LoginPrompt, LOGIN_QUESTION};
use crate::session::Session;

#[derive(Default)]
struct CacheState {
    session: Option<Session>,
    org: Option<OrgDisplay>,
}

/// Owns the single cached [`Session`] for an explorer instance.
///
/// The cache lock is held across probe and bootstrap, so concurrent callers
/// wait for one re-authentication instead of each starting their own.
pub struct SessionManager {
    cli: Arc<dyn OrgCli>,
    prompt: Arc<dyn LoginPrompt>,
    http: SfHttpClient,
    api_version: Option<String>,
    state: Mutex<CacheState>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(cli: Arc<dyn OrgCli>, prompt: Arc<dyn LoginPrompt>, http: SfHttpClient) -> Self {
        Self {
            cli,
            prompt,
            http,
            api_version: None,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Pin the API version instead of using the one the CLI reports.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Return a session the org currently accepts.
    ///
    /// A cached session is probed first and reused when the probe succeeds.
    /// Otherwise the CLI is asked for fresh credentials, which are verified
    /// with the same probe before being cached.
    #[instrument(skip(self))]
    pub async fn session(&self) -> Result<Session> {
        let mut state = self.state.lock().await;

        if let Some(cached) = state.session.take() {
            match self.probe(&cached).await {
                Ok(true) => {
                    debug!("Reusing cached session");
                    state.session = Some(cached.clone());
                    return Ok(cached);
                }
                Ok(false) => info!("Cached session rejected by org, re-authenticating"),
                Err(e) => warn!(error = %e, "Session probe failed, re-authenticating"),
            }
        }

        let org = self.bootstrap().await?;
        let session = Session::from_org_display(&org, self.api_version.as_deref())?;

        if !self.probe(&session).await? {
            return Err(Error::new(ErrorKind::TokenInvalid(format!(
                "{} rejected the token reported by the CLI",
                session.instance_url()
            ))));
        }

        info!(instance_url = %session.instance_url(), "Session established");
        state.org = Some(org);
        state.session = Some(session.clone());
        Ok(session)
    }

    /// The most recent `sf org display` payload, running the CLI if none is
    /// cached yet.
    pub async fn org_info(&self) -> Result<OrgDisplay> {
        let mut state = self.state.lock().await;
        if let Some(ref org) = state.org {
            return Ok(org.clone());
        }
        let org = self.cli.org_display().await?;
        state.org = Some(org.clone());
        Ok(org)
    }

    /// Drop the cached session and org details.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        *state = CacheState::default();
        debug!("Session cache cleared");
    }

    async fn probe(&self, session: &Session) -> Result<bool> {
        Ok(session.client(&self.http).probe().await?)
    }

    async fn bootstrap(&self) -> Result<OrgDisplay> {
        match self.cli.org_display().await {
            Ok(org) => return Ok(org),
            Err(e) if e.is_tooling_absent() => return Err(e),
            Err(e) => info!(error = %e, "No usable org from the CLI"),
        }

        if !self.prompt.confirm_login(LOGIN_QUESTION).await {
            return Err(Error::new(ErrorKind::AuthenticationRequired(
                "login declined; run `sf org login web` to authenticate".to_string(),
            )));
        }

        self.cli.login_web().await.map_err(login_failure)?;
        self.cli.org_display().await.map_err(login_failure)
    }
}

fn login_failure(err: Error) -> Error {
    if err.is_tooling_absent() {
        return err;
    }
    let message = format!("login did not produce a usable org: {err}");
    Error::with_source(ErrorKind::AuthenticationRequired(message), err)
}
