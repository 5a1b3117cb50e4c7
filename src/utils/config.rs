//! TOML-based configuration for the investigator server
//!
//! Infrastructure settings live in an optional `investigator.toml`. Secrets are
//! never written to the file: each section names the environment variable that
//! holds its key, and [`InvestigatorConfig::resolve_secrets`] reads them once at
//! startup.

use crate::rag::embeddings::EmbeddingModelKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "investigator.toml";

/// Root configuration structure loaded from investigator.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvestigatorConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub vector_store: VectorStoreConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Keys that are read at startup but not used by the request path
    #[serde(default)]
    pub reserved: ReservedConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

// ============= Vector Store Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreConfig {
    /// Environment variable containing the Pinecone API key
    #[serde(default = "default_pinecone_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_index_name")]
    pub index_name: String,

    /// Data-plane host of the index. Resolved through the control plane when absent.
    #[serde(default)]
    pub index_host: Option<String>,

    #[serde(default = "default_control_plane_url")]
    pub control_plane_url: String,

    #[serde(default)]
    pub namespace: String,

    /// Metadata key holding each chunk's text
    #[serde(default = "default_text_key")]
    pub text_key: String,
}

fn default_pinecone_key_env() -> String {
    "PINECONE_API_KEY".to_string()
}

fn default_index_name() -> String {
    "crime-investigater1".to_string()
}

fn default_control_plane_url() -> String {
    "https://api.pinecone.io".to_string()
}

fn default_text_key() -> String {
    "text".to_string()
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_pinecone_key_env(),
            index_name: default_index_name(),
            index_host: None,
            control_plane_url: default_control_plane_url(),
            namespace: String::new(),
            text_key: default_text_key(),
        }
    }
}

// ============= LLM Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Environment variable containing the gateway API key
    #[serde(default = "default_llm_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_llm_key_env() -> String {
    "OPENROUTER_API_KEY".to_string()
}

fn default_api_base() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "google/gemma-3-12b-it:free".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_llm_key_env(),
            api_base: default_api_base(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

// ============= Embedding Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    #[serde(default = "default_embedding_model")]
    pub model: String,

    #[serde(default = "default_true")]
    pub show_download_progress: bool,
}

fn default_embedding_model() -> String {
    "sentence-transformers/all-MiniLM-L6-v2".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: default_embedding_model(),
            show_download_progress: true,
        }
    }
}

// ============= Reserved Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservedConfig {
    #[serde(default = "default_gemini_key_env")]
    pub gemini_api_key_env: String,
}

fn default_gemini_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for ReservedConfig {
    fn default() -> Self {
        Self {
            gemini_api_key_env: default_gemini_key_env(),
        }
    }
}

// ============= Secrets =============

/// API keys resolved from the environment at startup
#[derive(Clone)]
pub struct Secrets {
    pub pinecone_api_key: String,
    pub llm_api_key: String,
    /// Read for completeness; nothing on the request path consumes it
    pub reserved_api_key: Option<String>,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("pinecone_api_key", &"***")
            .field("llm_api_key", &"***")
            .field("reserved_api_key", &self.reserved_api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Required environment variable '{0}' is not set")]
    MissingEnvVar(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl InvestigatorConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load the file if present, falling back to built-in defaults.
    ///
    /// `required` makes a missing file an error (used when the path was given
    /// explicitly on the command line).
    pub fn load_or_default<P: AsRef<Path>>(path: P, required: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !required && !path.exists() {
            debug!("No configuration file at {:?}, using defaults", path);
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        Self::load(path)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: InvestigatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vector_store.index_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "vector_store.index_name must not be empty".into(),
            ));
        }
        if self.vector_store.text_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "vector_store.text_key must not be empty".into(),
            ));
        }
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "llm.model must not be empty".into(),
            ));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::ValidationError(format!(
                "llm.temperature must be within [0, 2], got {}",
                self.llm.temperature
            )));
        }
        if self.llm.max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "llm.max_tokens must be greater than zero".into(),
            ));
        }
        if EmbeddingModelKind::from_name(&self.embedding.model).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "Unsupported embedding model '{}'. Supported: {}",
                self.embedding.model,
                EmbeddingModelKind::supported_names().join(", ")
            )));
        }
        Ok(())
    }

    /// Resolve API keys from the process environment
    pub fn resolve_secrets(&self) -> Result<Secrets, ConfigError> {
        self.resolve_secrets_with(|name| std::env::var(name).ok())
    }

    /// Resolve API keys through an arbitrary lookup.
    ///
    /// Empty values count as missing.
    pub fn resolve_secrets_with<F>(&self, lookup: F) -> Result<Secrets, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let pinecone_api_key = required(&self.vector_store.api_key_env)?;
        let llm_api_key = required(&self.llm.api_key_env)?;
        let reserved_api_key =
            lookup(&self.reserved.gemini_api_key_env).filter(|value| !value.is_empty());

        Ok(Secrets {
            pinecone_api_key,
            llm_api_key,
            reserved_api_key,
        })
    }
}
