use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sf_explorer_auth::{Error, ErrorKind, LoginPrompt, OrgCli, OrgDisplay, StaticPrompt};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{Explorer, ExplorerConfig};

enum Reply {
    Org(OrgDisplay),
    /// `sf` is not installed.
    Absent,
    /// `sf` runs but no org is linked, and web login fails.
    Unlinked,
}

/// `OrgCli` with a fixed answer that counts its invocations.
pub(crate) struct FakeCli {
    reply: Reply,
    display_calls: AtomicUsize,
    login_calls: AtomicUsize,
}

impl FakeCli {
    pub(crate) fn org_for_server(server: &MockServer) -> OrgDisplay {
        OrgDisplay {
            access_token: "tok".to_string(),
            instance_url: server.uri(),
            username: Some("admin@acme.com".to_string()),
            alias: Some("acme".to_string()),
            name: Some("Acme Corp".to_string()),
            ..Default::default()
        }
    }

    fn with_reply(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            display_calls: AtomicUsize::new(0),
            login_calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn new(org: OrgDisplay) -> Arc<Self> {
        Self::with_reply(Reply::Org(org))
    }

    pub(crate) fn for_server(server: &MockServer) -> Arc<Self> {
        Self::new(Self::org_for_server(server))
    }

    pub(crate) fn absent() -> Arc<Self> {
        Self::with_reply(Reply::Absent)
    }

    pub(crate) fn unlinked() -> Arc<Self> {
        Self::with_reply(Reply::Unlinked)
    }

    pub(crate) fn displays(&self) -> usize {
        self.display_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn logins(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrgCli for FakeCli {
    async fn org_display(&self) -> sf_explorer_auth::Result<OrgDisplay> {
        self.display_calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Org(org) => Ok(org.clone()),
            Reply::Absent => Err(Error::new(ErrorKind::ToolingAbsent(
                "'sf' was not found".to_string(),
            ))),
            Reply::Unlinked => Err(Error::new(ErrorKind::SfdxCli(
                "No default org found".to_string(),
            ))),
        }
    }

    async fn login_web(&self) -> sf_explorer_auth::Result<()> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::new(ErrorKind::SfdxCli("login not available".to_string())))
    }
}

/// Login prompt with a fixed answer that counts how often it was shown.
pub(crate) struct CountingPrompt {
    answer: bool,
    asked: AtomicUsize,
}

impl CountingPrompt {
    pub(crate) fn new(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            asked: AtomicUsize::new(0),
        })
    }

    pub(crate) fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LoginPrompt for CountingPrompt {
    async fn confirm_login(&self, _question: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

pub(crate) fn explorer_for(cli: Arc<FakeCli>) -> Explorer {
    explorer_with_prompt(cli, Arc::new(StaticPrompt(false)))
}

pub(crate) fn explorer_with_prompt(cli: Arc<FakeCli>, prompt: Arc<dyn LoginPrompt>) -> Explorer {
    Explorer::with_cli(&ExplorerConfig::default(), cli, prompt).expect("explorer builds")
}

pub(crate) async fn mount_probe(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}
