//! Panel open, visibility, re-authentication and disposal.

use std::time::Duration;

use super::common::{mount_identity, mount_org, open_panel, CountingCli};
use sf_object_explorer::panel::{InboundCommand, OutboundMessage, PanelEvent};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_open_pushes_object_list_with_user_and_org() {
    let server = MockServer::start().await;
    mount_org(&server).await;
    mount_identity(&server, 200).await;

    let cli = CountingCli::new(&server);
    let mut panel = open_panel(cli.clone());

    assert_eq!(
        serde_json::to_value(panel.next().await).unwrap(),
        serde_json::json!({
            "command": "loadObjects",
            "objects": [
                {"label": "Account", "apiName": "Account"},
                {"label": "Contact", "apiName": "Contact"}
            ],
            "userName": "admin@acme.com",
            "orgName": "Acme Corp",
            "currentObject": null
        })
    );
    assert_eq!(cli.displays(), 1);

    panel.send(PanelEvent::Dispose);
    panel.handle.await.unwrap();
}

#[tokio::test]
async fn test_identity_failure_shows_unknown_user_and_org() {
    let server = MockServer::start().await;
    mount_org(&server).await;
    mount_identity(&server, 500).await;

    let mut panel = open_panel(CountingCli::new(&server));

    match panel.next().await {
        OutboundMessage::LoadObjects {
            objects,
            user_name,
            org_name,
            ..
        } => {
            assert_eq!(objects.len(), 2);
            assert_eq!(user_name, "Unknown User");
            assert_eq!(org_name, "Unknown Org");
        }
        other => panic!("expected loadObjects, got {other:?}"),
    }
}

#[tokio::test]
async fn test_catalog_failure_pushes_error_and_can_be_retried() {
    let server = MockServer::start().await;
    // The first catalog request fails, later ones succeed.
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_org(&server).await;
    mount_identity(&server, 200).await;

    let mut panel = open_panel(CountingCli::new(&server));

    match panel.next().await {
        OutboundMessage::Error { message } => {
            assert!(message.starts_with("Error fetching objects:"), "{message}");
            assert!(message.contains("503"), "{message}");
        }
        other => panic!("expected error, got {other:?}"),
    }

    panel.send(PanelEvent::Command(InboundCommand::Reauthenticate));
    assert!(matches!(
        panel.next().await,
        OutboundMessage::LoadObjects { .. }
    ));
}

#[tokio::test]
async fn test_reopening_hidden_panel_reloads_with_current_object() {
    let server = MockServer::start().await;
    mount_org(&server).await;
    mount_identity(&server, 200).await;

    let mut panel = open_panel(CountingCli::new(&server));
    assert!(matches!(
        panel.next().await,
        OutboundMessage::LoadObjects { .. }
    ));

    panel.send(PanelEvent::Command(InboundCommand::SelectObject {
        object_name: "Account".to_string(),
    }));
    assert!(matches!(
        panel.next().await,
        OutboundMessage::DisplayMetadata { .. }
    ));

    panel.send(PanelEvent::Hidden);
    panel.send(PanelEvent::Visible);

    match panel.next().await {
        OutboundMessage::LoadObjects { current_object, .. } => {
            assert_eq!(current_object.as_deref(), Some("Account"));
        }
        other => panic!("expected loadObjects, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reauthenticate_asks_the_cli_again() {
    let server = MockServer::start().await;
    mount_org(&server).await;
    mount_identity(&server, 200).await;

    let cli = CountingCli::new(&server);
    let mut panel = open_panel(cli.clone());
    assert!(matches!(
        panel.next().await,
        OutboundMessage::LoadObjects { .. }
    ));
    assert_eq!(cli.displays(), 1);

    panel.send(PanelEvent::Command(InboundCommand::Reauthenticate));
    assert!(matches!(
        panel.next().await,
        OutboundMessage::LoadObjects { .. }
    ));
    assert_eq!(cli.displays(), 2);
}

#[tokio::test]
async fn test_dispose_cancels_in_flight_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/Contact/describe"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(20)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .and(query_param(
            "q",
            "SELECT Name, DeveloperName FROM RecordType WHERE SobjectType = 'Contact'",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalSize": 0,
            "done": true,
            "records": []
        })))
        .mount(&server)
        .await;
    mount_org(&server).await;
    mount_identity(&server, 200).await;

    let mut panel = open_panel(CountingCli::new(&server));
    assert!(matches!(
        panel.next().await,
        OutboundMessage::LoadObjects { .. }
    ));

    panel.send(PanelEvent::Command(InboundCommand::SelectObject {
        object_name: "Contact".to_string(),
    }));
    // Give the controller time to start the slow describe.
    tokio::time::sleep(Duration::from_millis(200)).await;
    panel.send(PanelEvent::Dispose);

    tokio::time::timeout(Duration::from_secs(5), panel.handle)
        .await
        .expect("controller stops promptly")
        .unwrap();
    assert!(panel.view.recv().await.is_none());
}
