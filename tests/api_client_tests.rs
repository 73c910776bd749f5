//! Integration tests for the API client over real HTTP.
//!
//! A mockito server stands in for the MindfulBytes service.

use mindfulbytes::api::{ApiClient, DateKey};
use mindfulbytes::errors::TransportError;
use std::net::TcpListener;

/// Returns a base URL on which nothing is listening.
fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_get_entries_for_full_date() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/topics/imgreader/fulldates/2024-05-01")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"uri":"/pics/a.jpg","uuid":"abc","plugin":"imgreader","fulldate":"2024-05-01"},
                {"uri":"/pics/b.jpg","uuid":"def","plugin":"imgreader"}]"#,
        )
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let date: DateKey = "2024-05-01".parse().unwrap();
    let found = client
        .get_entries_for_date("imgreader", &date)
        .await
        .expect("request should complete");

    mock.assert_async().await;
    assert_eq!(found.status_code, 200);
    assert!(!found.is_not_found());
    let ids: Vec<&str> = found.entries.iter().map(|r| r.uuid.as_str()).collect();
    assert_eq!(ids, vec!["abc", "def"]);
    assert_eq!(found.entries[0].fulldate.as_deref(), Some("2024-05-01"));
}

#[tokio::test]
async fn test_get_entries_not_found_resolves_with_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/topics/imgreader/fulldates/2024-05-02")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"No item for that date found"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let date: DateKey = "2024-05-02".parse().unwrap();
    let found = client.get_entries_for_date("imgreader", &date).await.unwrap();

    assert_eq!(found.status_code, 404);
    assert!(found.entries.is_empty());
    assert!(found.is_not_found());
}

#[tokio::test]
async fn test_get_entries_skips_malformed_records() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/topics/imgreader/fulldates/2024-05-03")
        .with_status(200)
        .with_body(r#"[{"uuid":"good"},{"uri":"/no/id.jpg"},42]"#)
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let date: DateKey = "2024-05-03".parse().unwrap();
    let found = client.get_entries_for_date("imgreader", &date).await.unwrap();

    assert_eq!(found.entries.len(), 1);
    assert_eq!(found.entries[0].uuid, "good");
}

#[tokio::test]
async fn test_get_entries_with_invalid_json_body_is_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/topics/imgreader/fulldates/2024-05-04")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let date: DateKey = "2024-05-04".parse().unwrap();
    let found = client.get_entries_for_date("imgreader", &date).await.unwrap();

    assert_eq!(found.status_code, 200);
    assert!(found.is_not_found());
}

#[tokio::test]
async fn test_short_date_key_uses_deprecated_route() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/topics/imgreader/dates/05-01")
        .with_status(200)
        .with_body(r#"[{"uuid":"legacy"}]"#)
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let date: DateKey = "05-01".parse().unwrap();
    let found = client.get_entries_for_date("imgreader", &date).await.unwrap();

    mock.assert_async().await;
    assert_eq!(found.entries[0].uuid, "legacy");
}

#[tokio::test]
async fn test_list_dates() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/topics/imgreader/fulldates/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["2024-01-01","05-01","2024-02-02","not-a-date",7]"#)
        .create_async()
        .await;

    let client = ApiClient::new(format!("{}/", server.url()));
    let dates = client.list_dates("imgreader").await.unwrap();

    mock.assert_async().await;
    let rendered: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
    assert_eq!(rendered, vec!["2024-01-01", "2024-02-02"]);
    assert!(dates.iter().all(DateKey::is_full));
}

#[tokio::test]
async fn test_list_dates_for_unknown_topic_is_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/topics/nothing/fulldates/")
        .with_status(404)
        .with_body(r#"{"error":"No plugins for that topic found"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let dates = client.list_dates("nothing").await.unwrap();

    assert!(dates.is_empty());
}

#[tokio::test]
async fn test_list_topics() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/topics")
        .with_status(200)
        .with_body(r#"{"imgreader":["imgreader","imgreader-fs"],"nature":["imgreader-nc"]}"#)
        .create_async()
        .await;

    let client = ApiClient::new(server.url());
    let topics = client.list_topics().await.unwrap();

    assert_eq!(topics.len(), 2);
    assert_eq!(topics["imgreader"], vec!["imgreader", "imgreader-fs"]);
    assert_eq!(topics["nature"], vec!["imgreader-nc"]);
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    let client = ApiClient::new(unreachable_base_url());

    let result = client.list_dates("imgreader").await;
    assert!(matches!(
        result,
        Err(TransportError::ConnectionFailed { .. })
    ));

    let date: DateKey = "2024-05-01".parse().unwrap();
    let result = client.get_entries_for_date("imgreader", &date).await;
    match result {
        Err(TransportError::ConnectionFailed { url, .. }) => {
            assert!(url.ends_with("/v1/topics/imgreader/fulldates/2024-05-01"))
        }
        other => panic!("Expected ConnectionFailed, got {:?}", other),
    }
}

#[test]
fn test_get_image_url_scenario() {
    let client = ApiClient::new("http://127.0.0.1:8085");
    assert_eq!(
        client.get_image_url("imgreader", "abc"),
        "http://127.0.0.1:8085/v1/plugins/imgreader/images/abc?format=jpg&size=800x600"
    );
}
