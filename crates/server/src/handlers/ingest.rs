//! # Knowledge Ingestion Handler
//!
//! A batch job that pushes the knowledge base into the vector index: each
//! document is embedded and upserted under a fresh id. A failure on one
//! document does not abort the batch; failed titles are collected and
//! reported so the batch can be re-run after fixing the cause.

use super::{AppError, AppState};
use axum::{extract::State, Json};
use dealerbot::{IndexEntry, MatchMetadata};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

/// The response body for the `/ingest/knowledge` endpoint.
#[derive(Serialize)]
pub struct IngestResponse {
    pub message: String,
    pub upserted: usize,
    pub failures: Vec<String>,
}

/// The handler for the `/ingest/knowledge` endpoint.
pub async fn ingest_knowledge_handler(
    State(app_state): State<AppState>,
) -> Result<Json<IngestResponse>, AppError> {
    let documents = app_state.knowledge_base.documents();
    info!("Starting knowledge ingestion for {} documents", documents.len());

    let mut upserted = 0;
    let mut failures = Vec::new();

    for document in documents {
        let Some(text) = document.embeddable_text() else {
            continue;
        };
        let title = document.title.clone().unwrap_or_default();

        let result = async {
            let vector = app_state.embedding_provider.embed(text).await?;
            let entry = IndexEntry {
                id: Uuid::new_v4().to_string(),
                values: vector,
                metadata: MatchMetadata {
                    title: Some(title.clone()),
                    content: Some(text.to_string()),
                },
            };
            app_state.index_provider.upsert(&[entry]).await
        }
        .await;

        match result {
            Ok(()) => upserted += 1,
            Err(e) => {
                error!("Failed to ingest document '{title}': {e}");
                failures.push(title);
            }
        }
    }

    let response = IngestResponse {
        message: format!(
            "Ingested {upserted} documents with {} failures.",
            failures.len()
        ),
        upserted,
        failures,
    };

    Ok(Json(response))
}
