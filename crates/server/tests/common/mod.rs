//! # Common Test Utilities
//!
//! Centralizes the integration test harness for `dealerbot-server`:
//! `TestApp` spawns a real server on a random port, configured against an
//! `httpmock::MockServer` standing in for the embedding, generation, and
//! vector index endpoints, with a temporary knowledge base file and an
//! in-memory booking database.

#![allow(unused)]

use anyhow::Result;
use dealerbot_server::{
    config::get_config,
    router::create_router,
    state::{build_app_state, AppState},
};
use httpmock::MockServer;
use reqwest::Client;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio::{net::TcpListener, task::JoinHandle};

/// The mock invoke path for the embedding model.
pub const EMBEDDING_PATH: &str = "/model/titan-embed/invoke";
/// The mock invoke path for the generation model.
pub const GENERATION_PATH: &str = "/model/nova/invoke";

/// The default knowledge base used by tests: one FAQ entry plus one general
/// content document.
pub const DEFAULT_KNOWLEDGE_BASE: &str = r#"[
  {
    "text": "What financing options do you offer?\nAnswer: We offer 10% down, 2.99% APR...",
    "metadata": { "category": "faq" }
  },
  {
    "title": "GT Performance",
    "content": "The GT has 450 horsepower."
  }
]"#;

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _kb_file: NamedTempFile,
    _config_file: NamedTempFile,
    _server_handle: JoinHandle<()>,
}

impl TestApp {
    /// Spawns the application server with the default knowledge base.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_knowledge_base(DEFAULT_KNOWLEDGE_BASE).await
    }

    /// Spawns the application server with the given knowledge base JSON.
    pub async fn spawn_with_knowledge_base(knowledge_base_json: &str) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();

        let mut kb_file = NamedTempFile::new()?;
        kb_file.write_all(knowledge_base_json.as_bytes())?;

        let config_content = format!(
            r#"
port: 0
db_url: ":memory:"
knowledge_base_path: "{}"
embedding:
  api_url: "{}"
  model_name: "mock-embedding-model"
generation:
  api_url: "{}"
  model_name: "mock-generation-model"
vector_index:
  api_url: "{}"
  api_key: "test-key"
"#,
            kb_file.path().display(),
            mock_server.url(EMBEDDING_PATH),
            mock_server.url(GENERATION_PATH),
            mock_server.base_url(),
        );
        let mut config_file = NamedTempFile::new()?;
        config_file.write_all(config_content.as_bytes())?;

        let config = get_config(Some(config_file.path().to_str().unwrap()))?;
        let app_state = build_app_state(config).await?;
        let app = create_router(app_state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let address = format!("http://127.0.0.1:{port}");

        let server_handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Server error: {e}");
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state,
            _kb_file: kb_file,
            _config_file: config_file,
            _server_handle: server_handle,
        })
    }
}
