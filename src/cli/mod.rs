//! CLI module for the investigator server
//!
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use crate::utils::config::{ConfigError, InvestigatorConfig, DEFAULT_CONFIG_PATH};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Crime-investigator RAG chat server
#[derive(Parser, Debug)]
#[command(
    name = "investigator-server",
    version,
    about = "Crime-investigator RAG chat server",
    long_about = "Answers questions about case documents: each question is embedded,\n\
                  matched against a Pinecone index and answered by a hosted LLM.\n\n\
                  Requires PINECONE_API_KEY and OPENROUTER_API_KEY in the environment or a .env file.",
    after_help = "EXAMPLES:\n    \
                  investigator-server                       # Serve on 0.0.0.0:5000 with defaults\n    \
                  investigator-server --port 8080           # Override the port\n    \
                  investigator-server --config prod.toml    # Use a custom config file"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to investigator.toml if present)
    #[arg(short, long, env = "INVESTIGATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the bind address
    #[arg(long)]
    pub host: Option<String>,

    /// Override the port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Force debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load configuration and apply command-line overrides.
    ///
    /// An explicitly named file must exist; the default one is optional.
    pub fn load_config(&self) -> Result<InvestigatorConfig, ConfigError> {
        let mut config =
            InvestigatorConfig::load_or_default(self.config_path(), self.config.is_some())?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// The configuration file this invocation reads, explicit or default
    pub fn config_path(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH))
    }

    fn apply_overrides(&self, config: &mut InvestigatorConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.verbose {
            config.server.log_level = "debug".to_string();
        }
    }
}
