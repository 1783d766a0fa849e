//! # Application Configuration
//!
//! Defines the configuration structure for `dealerbot-server` and the logic
//! for loading it from a YAML file with environment variable layering. Values
//! like `${BEDROCK_API_KEY}` inside the file are substituted from the
//! environment before parsing.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The path to the SQLite database file for bookings.
    #[serde(default = "default_db_url")]
    pub db_url: String,
    /// The path to the knowledge base JSON file.
    #[serde(default = "default_knowledge_base_path")]
    pub knowledge_base_path: String,
    /// The region used when deriving default model invoke URLs.
    #[serde(default = "default_aws_region")]
    pub aws_region: String,
    /// Configuration for the text embedding model.
    pub embedding: ModelConfig,
    /// Configuration for the answer generation model.
    pub generation: ModelConfig,
    /// Configuration for the external vector index.
    pub vector_index: IndexConfig,
}

fn default_port() -> u16 {
    9090
}

fn default_db_url() -> String {
    "db/dealerbot.db".to_string()
}

fn default_knowledge_base_path() -> String {
    "data.json".to_string()
}

fn default_aws_region() -> String {
    "us-east-1".to_string()
}

/// Configuration for a single model endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// The full invoke URL. When absent, it is derived from the model name
    /// and region.
    #[serde(default)]
    pub api_url: Option<String>,
    pub model_name: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ModelConfig {
    /// The invoke URL for this model, deriving the Bedrock runtime endpoint
    /// when no explicit URL is configured.
    pub fn invoke_url(&self, region: &str) -> String {
        self.api_url.clone().unwrap_or_else(|| {
            format!(
                "https://bedrock-runtime.{region}.amazonaws.com/model/{}/invoke",
                self.model_name
            )
        })
    }
}

/// Configuration for the external vector index.
#[derive(Debug, Deserialize, Clone)]
pub struct IndexConfig {
    /// The index host URL.
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|_| "".to_string())
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// Top-level keys like `port` and `db_url` are overridden by `PORT` and
/// `DB_URL`; nested keys by `DEALERBOT_...` variables (e.g.
/// `DEALERBOT_EMBEDDING__API_URL`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let config_path = if let Some(override_path) = config_path_override {
        override_path.to_string()
    } else {
        let base_path = env!("CARGO_MANIFEST_DIR");
        format!("{base_path}/config.yml")
    };

    let content = read_and_substitute(&config_path)?.ok_or_else(|| {
        ConfigError::NotFound(format!("Config file not found at '{config_path}'."))
    })?;
    info!("Loading configuration from '{config_path}'.");

    let settings = ConfigBuilder::builder()
        .add_source(File::from_str(&content, FileFormat::Yaml))
        // Environment variables for top-level keys like PORT.
        .add_source(Environment::default())
        // Prefixed environment variables for deeper overrides.
        .add_source(
            Environment::with_prefix("DEALERBOT")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
