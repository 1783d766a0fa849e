//! # Application State
//!
//! The shared application state (`AppState`) and the logic for building it at
//! startup: loading the knowledge base, connecting the booking store, and
//! instantiating the provider clients. The knowledge base is read-only and
//! small, so it is loaded once and shared across requests.

use crate::config::AppConfig;
use dealerbot::{
    bookings::BookingStore,
    providers::{
        ai::{
            bedrock::{NovaGenerationProvider, TitanEmbeddingProvider},
            EmbeddingProvider, GenerationProvider,
        },
        index::{pinecone::PineconeProvider, VectorIndexProvider},
    },
    KnowledgeBase, QueryResolver,
};
use std::sync::Arc;
use tracing::{info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// The cached knowledge base documents.
    pub knowledge_base: Arc<KnowledgeBase>,
    /// The chat pipeline orchestrator.
    pub resolver: QueryResolver,
    /// The embedding provider, used directly by the ingestion handler.
    pub embedding_provider: Arc<dyn EmbeddingProvider>,
    /// The vector index provider, used directly by the ingestion handler.
    pub index_provider: Arc<dyn VectorIndexProvider>,
    /// Persistence for test drive bookings.
    pub booking_store: BookingStore,
}

/// Builds the shared application state from the configuration.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let knowledge_base = match KnowledgeBase::from_path(&config.knowledge_base_path) {
        Ok(kb) => {
            info!(
                path = %config.knowledge_base_path,
                documents = kb.len(),
                "Loaded knowledge base"
            );
            kb
        }
        Err(e) => {
            warn!(
                path = %config.knowledge_base_path,
                "Failed to load knowledge base, starting empty: {e}"
            );
            KnowledgeBase::default()
        }
    };
    let knowledge_base = Arc::new(knowledge_base);

    let embedding_provider: Arc<dyn EmbeddingProvider> = Arc::new(TitanEmbeddingProvider::new(
        config.embedding.invoke_url(&config.aws_region),
        config.embedding.api_key.clone(),
    )?);
    let generation_provider: Arc<dyn GenerationProvider> = Arc::new(NovaGenerationProvider::new(
        config.generation.invoke_url(&config.aws_region),
        config.generation.api_key.clone(),
    )?);
    let index_provider: Arc<dyn VectorIndexProvider> = Arc::new(PineconeProvider::new(
        config.vector_index.api_url.clone(),
        config.vector_index.api_key.clone(),
    )?);

    let resolver = QueryResolver::new(
        Arc::clone(&knowledge_base),
        Arc::clone(&embedding_provider),
        Arc::clone(&index_provider),
        Arc::clone(&generation_provider),
    );

    let booking_store = BookingStore::new(&config.db_url).await?;
    booking_store.initialize_schema().await?;
    info!(db_path = %config.db_url, "Initialized booking store");

    Ok(AppState {
        config: Arc::new(config),
        knowledge_base,
        resolver,
        embedding_provider,
        index_provider,
        booking_store,
    })
}
