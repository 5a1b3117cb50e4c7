use anyhow::Context;
use investigator::{
    api::routes::create_router,
    cli::{output::Output, Cli},
    utils::config::{LogFormat, ServerConfig},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };
    output.banner();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            output.error(&e.to_string());
            return Err(e).context("Failed to load configuration");
        }
    };
    init_tracing(&config.server);

    // Config is read before the subscriber exists, so its source is logged here
    let config_path = cli.config_path();
    if config_path.exists() {
        tracing::info!(path = %config_path.display(), "Loaded configuration");
    } else {
        tracing::info!(path = %config_path.display(), "No configuration file, using defaults");
    }

    let secrets = match config.resolve_secrets() {
        Ok(secrets) => secrets,
        Err(e) => {
            output.error(&e.to_string());
            return Err(e).context("Missing required API key");
        }
    };
    if secrets.reserved_api_key.is_some() {
        tracing::debug!(
            env = %config.reserved.gemini_api_key_env,
            "Reserved API key present; not used by the chat pipeline"
        );
    }

    output.info(&format!(
        "Loading embedding model {}",
        config.embedding.model
    ));
    output.info(&format!(
        "Connecting to Pinecone index {}",
        config.vector_store.index_name
    ));
    let state = AppState::from_config(&config, &secrets)
        .await
        .context("Failed to initialize RAG pipeline")?;
    output.success(&format!("Answering with {}", config.llm.model));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    output.success(&format!("Listening on http://{}", addr));
    if config.server.host == "0.0.0.0" {
        output.warning("Bound to all interfaces with no authentication; not for public exposure");
    }
    tracing::info!(address = %addr, "Server started");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "investigator={level},investigator_server={level},tower_http={level},ort=warn",
            level = server.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
