//! End-to-end tests for the knowledge ingestion endpoint.

mod common;

use anyhow::Result;
use common::{TestApp, EMBEDDING_PATH};
use httpmock::Method::POST;
use serde_json::{json, Value};

#[tokio::test]
async fn test_ingest_embeds_and_upserts_every_document() -> Result<()> {
    let app = TestApp::spawn().await?;

    let embed_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(EMBEDDING_PATH);
        then.status(200).json_body(json!({ "embedding": [0.1, 0.2, 0.3] }));
    });
    let upsert_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path("/vectors/upsert");
        then.status(200).json_body(json!({ "upsertedCount": 1 }));
    });

    let response = app
        .client
        .post(format!("{}/ingest/knowledge", app.address))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    // The default knowledge base has two embeddable documents.
    assert_eq!(body["upserted"], 2);
    assert_eq!(body["failures"].as_array().map(Vec::len), Some(0));

    assert_eq!(embed_mock.hits(), 2);
    assert_eq!(upsert_mock.hits(), 2);
    Ok(())
}

#[tokio::test]
async fn test_per_document_failures_are_collected_not_fatal() -> Result<()> {
    let app = TestApp::spawn().await?;

    let embed_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(EMBEDDING_PATH);
        then.status(500).body("embedding outage");
    });

    let response = app
        .client
        .post(format!("{}/ingest/knowledge", app.address))
        .send()
        .await?;

    // The batch completes and reports per-document failures.
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["upserted"], 0);
    assert_eq!(body["failures"].as_array().map(Vec::len), Some(2));

    assert_eq!(embed_mock.hits(), 2);
    Ok(())
}

#[tokio::test]
async fn test_documents_without_text_are_skipped() -> Result<()> {
    let app = TestApp::spawn_with_knowledge_base(
        r#"[
            { "title": "Empty doc" },
            { "title": "Hours", "content": "Open 9-6 daily." }
        ]"#,
    )
    .await?;

    let embed_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(EMBEDDING_PATH);
        then.status(200).json_body(json!({ "embedding": [0.1] }));
    });
    let upsert_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path("/vectors/upsert");
        then.status(200).json_body(json!({ "upsertedCount": 1 }));
    });

    let response = app
        .client
        .post(format!("{}/ingest/knowledge", app.address))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["upserted"], 1);

    assert_eq!(embed_mock.hits(), 1);
    assert_eq!(upsert_mock.hits(), 1);
    Ok(())
}
