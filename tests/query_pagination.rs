//! Paginated query tests against a mock Notion API.
//!
//! Verifies the wire contract: the query is re-issued carrying the
//! opaque continuation cursor until the service clears `has_more`, and
//! the accumulated records keep arrival order through to the tabular
//! projection.

use notion2table::{ApiKey, AppError, CellValue, NotionClient, NotionId};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DB_ID: &str = "29965940ff704020b78b7ec20dc063c6";
const QUERY_PATH: &str = "/databases/29965940-ff70-4020-b78b-7ec20dc063c6/query";

fn record(id: &str, name: &str, extra: serde_json::Value) -> serde_json::Value {
    let mut properties = json!({
        "Name": {"id": "t", "type": "title", "title": [{"plain_text": name}]}
    });
    if let Some(map) = extra.as_object() {
        for (key, value) in map {
            properties[key] = value.clone();
        }
    }
    json!({"object": "page", "id": id, "properties": properties})
}

async fn mount_probe(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": []
        })))
        .mount(server)
        .await;
}

async fn connect(server: &MockServer) -> NotionClient {
    let base = server.uri();
    tokio::task::spawn_blocking(move || {
        NotionClient::connect_with_base_url(ApiKey::new("secret_abc").unwrap(), &base)
    })
    .await
    .unwrap()
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn three_page_query_issues_exactly_three_requests() {
    let server = MockServer::start().await;
    mount_probe(&server).await;

    // Cursor-specific mocks take priority; the catch-all handles the
    // first request, which carries no cursor.
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_partial_json(json!({"start_cursor": "c1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [record("r3", "Gamma", json!({})), record("r4", "Delta", json!({}))],
            "next_cursor": "c2",
            "has_more": true
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_partial_json(json!({"start_cursor": "c2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [record("r5", "Epsilon", json!({}))],
            "next_cursor": null,
            "has_more": false
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [record("r1", "Alpha", json!({})), record("r2", "Beta", json!({}))],
            "next_cursor": "c1",
            "has_more": true
        })))
        .with_priority(10)
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let collection = NotionId::parse(DB_ID).unwrap();

    let records = tokio::task::spawn_blocking(move || client.query_raw(&collection, None))
        .await
        .unwrap()
        .unwrap();

    let ids: Vec<&str> = records
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["r1", "r2", "r3", "r4", "r5"]);

    // Mock expectations assert the request count: exactly one hit per page.
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn query_table_projects_union_of_columns_in_first_seen_order() {
    let server = MockServer::start().await;
    mount_probe(&server).await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [
                record("a", "Page A", json!({
                    "Phone": {"id": "p", "type": "phone_number", "phone_number": "555-0100"}
                })),
                record("b", "Page B", json!({
                    "Languages": {"id": "l", "type": "multi_select",
                                  "multi_select": [{"name": "Somali"}, {"name": "English"}]}
                }))
            ],
            "next_cursor": null,
            "has_more": false
        })))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let collection = NotionId::parse(DB_ID).unwrap();

    let table = tokio::task::spawn_blocking(move || client.query_table(&collection, None))
        .await
        .unwrap()
        .unwrap();

    let columns: Vec<&str> = table.columns().iter().map(|c| c.as_str()).collect();
    assert_eq!(columns, vec!["Name", "Phone", "Languages"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0][2], CellValue::Absent);
    assert_eq!(table.rows()[1][1], CellValue::Absent);
    assert_eq!(
        table.rows()[1][2],
        CellValue::TextList(vec!["Somali".to_string(), "English".to_string()])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_round_trip_aborts_the_whole_fetch() {
    let server = MockServer::start().await;
    mount_probe(&server).await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_partial_json(json!({"start_cursor": "c1"})))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "cursor expired"
        })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [record("r1", "Alpha", json!({}))],
            "next_cursor": "c1",
            "has_more": true
        })))
        .with_priority(10)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let collection = NotionId::parse(DB_ID).unwrap();

    let result = tokio::task::spawn_blocking(move || client.query_raw(&collection, None))
        .await
        .unwrap();

    match result {
        Err(AppError::NotionService { code, .. }) => assert!(code.is_not_found()),
        other => panic!("expected service error, got {:?}", other.err()),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn caller_filter_is_carried_on_every_request() {
    let server = MockServer::start().await;
    mount_probe(&server).await;

    let filter = json!({"property": "Verified", "checkbox": {"equals": true}});

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_partial_json(json!({"filter": filter.clone(), "start_cursor": "c1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [record("r2", "Beta", json!({}))],
            "next_cursor": null,
            "has_more": false
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_partial_json(json!({"filter": filter.clone()})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [record("r1", "Alpha", json!({}))],
            "next_cursor": "c1",
            "has_more": true
        })))
        .with_priority(10)
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let collection = NotionId::parse(DB_ID).unwrap();
    let filter_arg = filter.clone();

    let records =
        tokio::task::spawn_blocking(move || client.query_raw(&collection, Some(&filter_arg)))
            .await
            .unwrap()
            .unwrap();

    assert_eq!(records.len(), 2);
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn single_record_and_collection_metadata_fetch() {
    let server = MockServer::start().await;
    mount_probe(&server).await;

    Mock::given(method("GET"))
        .and(path("/pages/29965940-ff70-4020-b78b-7ec20dc063c6"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(record("29965940ff704020b78b7ec20dc063c6", "Solo", json!({}))),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/databases/29965940-ff70-4020-b78b-7ec20dc063c6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "database",
            "id": DB_ID,
            "title": [{"plain_text": "Community "}, {"plain_text": "Directory"}]
        })))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let id = NotionId::parse(DB_ID).unwrap();

    let (record, meta) = tokio::task::spawn_blocking(move || {
        let record = client.fetch_record(&id)?;
        let meta = client.fetch_collection(&id)?;
        Ok::<_, AppError>((record, meta))
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(record.id, DB_ID);
    assert_eq!(meta.title_text(), "Community Directory");
}
