//! End-to-end tests for the `/chat` endpoint covering every terminal outcome
//! of the pipeline: FAQ hit, retrieved answer, no-information fallback,
//! validation failure, and upstream failure.

mod common;

use anyhow::Result;
use common::{TestApp, EMBEDDING_PATH, GENERATION_PATH};
use httpmock::Method::POST;
use serde_json::{json, Value};

#[tokio::test]
async fn test_faq_hit_answers_without_provider_calls() -> Result<()> {
    let app = TestApp::spawn().await?;

    let embed_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(EMBEDDING_PATH);
        then.status(200).json_body(json!({ "embedding": [0.1, 0.2] }));
    });
    let query_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path("/query");
        then.status(200).json_body(json!({ "matches": [] }));
    });
    let generate_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(GENERATION_PATH);
        then.status(200).json_body(json!({}));
    });

    let response = app
        .client
        .post(format!("{}/chat", app.address))
        .json(&json!({ "query": "What financing options do you offer?" }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["answer"], "We offer 10% down, 2.99% APR...");

    // The FAQ short-circuit must not touch any external provider.
    assert_eq!(embed_mock.hits(), 0);
    assert_eq!(query_mock.hits(), 0);
    assert_eq!(generate_mock.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn test_empty_search_returns_fallback_without_generation() -> Result<()> {
    let app = TestApp::spawn().await?;

    let embed_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(EMBEDDING_PATH);
        then.status(200).json_body(json!({ "embedding": [0.1, 0.2] }));
    });
    let query_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path("/query");
        then.status(200).json_body(json!({ "matches": [] }));
    });
    let generate_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(GENERATION_PATH);
        then.status(200).json_body(json!({}));
    });

    let response = app
        .client
        .post(format!("{}/chat", app.address))
        .json(&json!({ "query": "Do you sell motorcycles?" }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(
        body["answer"],
        "Sorry, I don't have information on that right now."
    );

    assert_eq!(embed_mock.hits(), 1);
    assert_eq!(query_mock.hits(), 1);
    assert_eq!(generate_mock.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn test_retrieved_answer_flows_through_generation() -> Result<()> {
    let app = TestApp::spawn().await?;

    let embed_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(EMBEDDING_PATH);
        then.status(200).json_body(json!({ "embedding": [0.5, 0.5] }));
    });
    let query_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path("/query");
        then.status(200).json_body(json!({
            "matches": [
                { "score": 0.93, "metadata": { "content": "The GT has 450 horsepower." } }
            ]
        }));
    });
    let generate_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(GENERATION_PATH);
        then.status(200).json_body(json!({
            "output": { "message": { "content": [{ "text": "It makes 450 horsepower." }] } }
        }));
    });

    let response = app
        .client
        .post(format!("{}/chat", app.address))
        .json(&json!({ "query": "How powerful is the GT?" }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["answer"], "It makes 450 horsepower.");

    assert_eq!(embed_mock.hits(), 1);
    assert_eq!(query_mock.hits(), 1);
    assert_eq!(generate_mock.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn test_blank_and_missing_query_return_400() -> Result<()> {
    let app = TestApp::spawn().await?;

    for payload in [json!({ "query": "   " }), json!({})] {
        let response = app
            .client
            .post(format!("{}/chat", app.address))
            .json(&payload)
            .send()
            .await?;

        assert_eq!(response.status(), 400, "payload: {payload}");
        let body: Value = response.json().await?;
        assert!(body["error"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn test_embedding_failure_returns_500() -> Result<()> {
    let app = TestApp::spawn().await?;

    let embed_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(EMBEDDING_PATH);
        then.status(500).body("embedding backend exploded");
    });

    let response = app
        .client
        .post(format!("{}/chat", app.address))
        .json(&json!({ "query": "random question" }))
        .send()
        .await?;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await?;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("embedding backend exploded"));
    assert_eq!(embed_mock.hits(), 1);
    Ok(())
}
