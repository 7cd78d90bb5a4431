//! View commands: object selection and queries.

use super::common::{mount_identity, mount_org, open_panel, CountingCli, Panel};
use sf_object_explorer::panel::{HostMessage, OutboundMessage, PanelEvent};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Open a panel on a fully mounted org and consume the initial load.
async fn ready_panel(server: &MockServer, cli: std::sync::Arc<CountingCli>) -> Panel {
    mount_org(server).await;
    mount_identity(server, 200).await;

    let mut panel = open_panel(cli);
    assert!(matches!(
        panel.next().await,
        OutboundMessage::LoadObjects { .. }
    ));
    panel
}

/// Send a raw line the way the stdio host does.
fn send_line(panel: &Panel, line: &str) {
    let message: HostMessage = serde_json::from_str(line).expect("valid host message");
    panel.send(PanelEvent::from(message));
}

#[tokio::test]
async fn test_select_object_pushes_normalized_metadata() {
    let server = MockServer::start().await;
    let mut panel = ready_panel(&server, CountingCli::new(&server)).await;

    send_line(&panel, r#"{"command":"selectObject","objectName":"Account"}"#);

    let data = match panel.next().await {
        OutboundMessage::DisplayMetadata { data } => serde_json::to_value(data).unwrap(),
        other => panic!("expected displayMetadata, got {other:?}"),
    };

    assert_eq!(data["apiName"], "Account");
    assert_eq!(data["fields"][0]["apiName"], "Id");
    assert_eq!(data["fields"][0]["required"], true);
    assert_eq!(data["fields"][0]["referenceTo"], serde_json::json!([]));
    assert_eq!(data["fields"][1]["required"], false);
    assert_eq!(data["fields"][1]["referenceTo"], serde_json::json!(["User"]));
    assert_eq!(data["fields"][1]["relationshipName"], "Owner");
    assert_eq!(data["fields"][2]["type"], "picklist");
    assert_eq!(data["fields"][2]["picklistValues"][0]["value"], "Hot");
    assert_eq!(data["fields"][2]["relationshipName"], serde_json::Value::Null);
    assert_eq!(
        data["childRelationships"],
        serde_json::json!([
            {"childSObject": "Contact", "relationshipName": "Contacts", "field": "AccountId"}
        ])
    );
    assert_eq!(data["recordTypes"], serde_json::json!([]));
    assert_eq!(
        data["pageLayouts"],
        serde_json::json!([{"label": "Layout A", "apiName": "Account-Layout A"}])
    );
}

#[tokio::test]
async fn test_run_query_pushes_rows_for_both_command_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .and(query_param("q", "SELECT Id, Name FROM Account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalSize": 1,
            "done": true,
            "records": [{
                "attributes": {"type": "Account", "url": "/services/data/v62.0/sobjects/Account/001000000000001AAA"},
                "Id": "001000000000001AAA",
                "Name": "Acme"
            }]
        })))
        .mount(&server)
        .await;
    let mut panel = ready_panel(&server, CountingCli::new(&server)).await;

    for line in [
        r#"{"command":"runQuery","query":"SELECT Id, Name FROM Account"}"#,
        r#"{"command":"runSOQLQuery","query":"SELECT Id, Name FROM Account"}"#,
    ] {
        send_line(&panel, line);
        match panel.next().await {
            OutboundMessage::DisplaySoqlResults { data } => {
                assert_eq!(data.len(), 1);
                assert_eq!(data[0]["Name"], "Acme");
                assert_eq!(data[0]["attributes"]["type"], "Account");
            }
            other => panic!("expected displaySOQLResults, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_rejected_input_never_reaches_the_org() {
    let server = MockServer::start().await;
    let mut panel = ready_panel(&server, CountingCli::new(&server)).await;
    let before = server.received_requests().await.unwrap().len();

    send_line(&panel, r#"{"command":"runQuery","query":"DELETE FROM Account"}"#);
    match panel.next().await {
        OutboundMessage::Error { message } => {
            assert!(message.starts_with("Error running SOQL query: Invalid input"), "{message}");
        }
        other => panic!("expected error, got {other:?}"),
    }

    send_line(&panel, r#"{"command":"selectObject","objectName":"Account' OR 1=1"}"#);
    match panel.next().await {
        OutboundMessage::Error { message } => {
            assert!(message.starts_with("Error fetching metadata: Invalid input"), "{message}");
        }
        other => panic!("expected error, got {other:?}"),
    }

    assert_eq!(server.received_requests().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_query_error_from_org_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .and(query_param("q", "SELECT Nope FROM Account"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"[{"message":"No such column 'Nope' on entity 'Account'","errorCode":"INVALID_FIELD"}]"#,
        ))
        .mount(&server)
        .await;
    let mut panel = ready_panel(&server, CountingCli::new(&server)).await;

    send_line(&panel, r#"{"command":"runQuery","query":"SELECT Nope FROM Account"}"#);
    match panel.next().await {
        OutboundMessage::Error { message } => {
            assert!(message.contains("400"), "{message}");
            assert!(message.contains("INVALID_FIELD"), "{message}");
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_valid_session_is_reused_across_commands() {
    let server = MockServer::start().await;
    let cli = CountingCli::new(&server);
    let mut panel = ready_panel(&server, cli.clone()).await;

    send_line(&panel, r#"{"command":"selectObject","objectName":"Account"}"#);
    assert!(matches!(
        panel.next().await,
        OutboundMessage::DisplayMetadata { .. }
    ));
    send_line(&panel, r#"{"command":"selectObject","objectName":"Account"}"#);
    assert!(matches!(
        panel.next().await,
        OutboundMessage::DisplayMetadata { .. }
    ));

    assert_eq!(cli.displays(), 1);
}
