//! The newline-delimited JSON transport used by the binary.

use super::common::{explorer_for, mount_identity, mount_org, CountingCli};
use sf_object_explorer::stdio::serve;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_account_query(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/query"))
        .and(query_param("q", "SELECT Id, Name FROM Account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalSize": 1,
            "done": true,
            "records": [{"Id": "001000000000001AAA", "Name": "Acme"}]
        })))
        .mount(server)
        .await;
}

fn notifications(output: Vec<u8>) -> Vec<serde_json::Value> {
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).expect("one JSON object per line"))
        .collect()
}

#[tokio::test]
async fn test_end_of_input_answers_every_command_read() {
    let server = MockServer::start().await;
    mount_org(&server).await;
    mount_identity(&server, 200).await;
    mount_account_query(&server).await;

    let input = concat!(
        r#"{"command":"runQuery","query":"SELECT Id, Name FROM Account"}"#,
        "\n",
        "not json\n",
        "\n",
        r#"{"command":"selectObject","objectName":"Account"}"#,
        "\n",
    );
    let mut output = Vec::new();
    serve(
        explorer_for(CountingCli::new(&server)),
        input.as_bytes(),
        &mut output,
    )
    .await
    .unwrap();

    let sent = notifications(output);
    let commands: Vec<&str> = sent
        .iter()
        .map(|n| n["command"].as_str().unwrap())
        .collect();
    assert_eq!(
        commands,
        ["loadObjects", "displaySOQLResults", "displayMetadata"]
    );
    assert_eq!(sent[1]["data"][0]["Name"], "Acme");
    assert_eq!(sent[2]["data"]["apiName"], "Account");
}

#[tokio::test]
async fn test_dispose_stops_reading_input() {
    let server = MockServer::start().await;
    mount_org(&server).await;
    mount_identity(&server, 200).await;
    mount_account_query(&server).await;

    let input = concat!(
        r#"{"event":"dispose"}"#,
        "\n",
        r#"{"command":"runQuery","query":"SELECT Id, Name FROM Account"}"#,
        "\n",
    );
    let mut output = Vec::new();
    serve(
        explorer_for(CountingCli::new(&server)),
        input.as_bytes(),
        &mut output,
    )
    .await
    .unwrap();

    // The initial load may or may not finish before the dispose lands.
    assert!(notifications(output)
        .iter()
        .all(|n| n["command"] == "loadObjects"));
    let requests = server.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|r| r.url.path() != "/services/data/v62.0/query"));
}
