use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sf_object_explorer::auth::{Error, ErrorKind, OrgCli, OrgDisplay, StaticPrompt};
use sf_object_explorer::panel::{
    Explorer, ExplorerConfig, OutboundMessage, PanelController, PanelEvent,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `sf` stand-in that reports one org and counts how often it was asked.
pub struct CountingCli {
    org: OrgDisplay,
    displays: AtomicUsize,
}

impl CountingCli {
    pub fn new(server: &MockServer) -> Arc<Self> {
        Arc::new(Self {
            org: OrgDisplay {
                access_token: "00D000000000001!test".to_string(),
                instance_url: server.uri(),
                username: Some("admin@acme.com".to_string()),
                alias: Some("acme".to_string()),
                name: Some("Acme Corp".to_string()),
                ..Default::default()
            },
            displays: AtomicUsize::new(0),
        })
    }

    pub fn displays(&self) -> usize {
        self.displays.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrgCli for CountingCli {
    async fn org_display(&self) -> sf_object_explorer::auth::Result<OrgDisplay> {
        self.displays.fetch_add(1, Ordering::SeqCst);
        Ok(self.org.clone())
    }

    async fn login_web(&self) -> sf_object_explorer::auth::Result<()> {
        Err(Error::new(ErrorKind::SfdxCli("no browser in tests".to_string())))
    }
}

pub struct Panel {
    pub events: UnboundedSender<PanelEvent>,
    pub view: UnboundedReceiver<OutboundMessage>,
    pub handle: JoinHandle<()>,
}

impl Panel {
    /// Next notification, failing the test if none arrives in time.
    pub async fn next(&mut self) -> OutboundMessage {
        tokio::time::timeout(Duration::from_secs(10), self.view.recv())
            .await
            .expect("notification within 10s")
            .expect("view channel open")
    }

    pub fn send(&self, event: PanelEvent) {
        self.events.send(event).expect("controller running");
    }
}

pub fn explorer_for(cli: Arc<CountingCli>) -> Explorer {
    Explorer::with_cli(&ExplorerConfig::default(), cli, Arc::new(StaticPrompt(false)))
        .expect("explorer builds")
}

/// Start a controller against `cli` the way a host would.
pub fn open_panel(cli: Arc<CountingCli>) -> Panel {
    let explorer = explorer_for(cli);

    let (view_tx, view) = mpsc::unbounded_channel();
    let (events, events_rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(PanelController::new(explorer, view_tx).run(events_rx));

    Panel {
        events,
        view,
        handle,
    }
}

/// An org with a session probe, one object, a user, and Account metadata.
pub async fn mount_org(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "encoding": "UTF-8",
            "maxBatchSize": 200,
            "sobjects": [
                {"name": "Account", "label": "Account", "custom": false},
                {"name": "Contact", "label": "Contact", "custom": false}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/Account/describe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Account",
            "label": "Account",
            "custom": false,
            "fields": [
                {"name": "Id", "label": "Account ID", "type": "id", "nillable": false, "custom": false},
                {"name": "OwnerId", "label": "Owner ID", "type": "reference", "nillable": true,
                 "referenceTo": ["User"], "relationshipName": "Owner", "custom": false},
                {"name": "Rating", "label": "Account Rating", "type": "picklist", "nillable": true,
                 "picklistValues": [{"value": "Hot", "label": "Hot", "active": true, "defaultValue": false}],
                 "custom": false}
            ],
            "childRelationships": [
                {"childSObject": "Contact", "field": "AccountId", "relationshipName": "Contacts"}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .and(query_param(
            "q",
            "SELECT Name, DeveloperName FROM RecordType WHERE SobjectType = 'Account'",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalSize": 0,
            "done": true,
            "records": []
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/services/Soap/m/62.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns="http://soap.sforce.com/2006/04/metadata">
  <soapenv:Body>
    <listMetadataResponse>
      <result><fullName>Account-Layout A</fullName><type>Layout</type></result>
      <result><fullName>Contact-Layout B</fullName><type>Layout</type></result>
    </listMetadataResponse>
  </soapenv:Body>
</soapenv:Envelope>"#,
        ))
        .mount(server)
        .await;
}

pub async fn mount_identity(server: &MockServer, status: u16) {
    let response = if status == 200 {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "preferred_username": "admin@acme.com",
            "name": "Ada Admin"
        }))
    } else {
        ResponseTemplate::new(status).set_body_string("identity unavailable")
    };

    Mock::given(method("GET"))
        .and(path("/services/oauth2/userinfo"))
        .respond_with(response)
        .mount(server)
        .await;
}
