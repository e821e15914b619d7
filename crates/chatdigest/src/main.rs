use anyhow::Result;
use chatdigest_common::{config::credential_instructions, logger, AppConfig, ChatDigestError};
use chatdigest_llm::OpenAiClient;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
            return;
        }
    }
    dotenv::dotenv().ok();
}

#[derive(Parser)]
#[command(name = "chatdigest")]
#[command(about = "ChatDigest - summarize group chats and email threads into decisions and action items", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Operator-facing text for a missing API key
fn credential_report(err: &ChatDigestError) -> String {
    format!("{}\n{}", err, credential_instructions())
}

/// Load configuration, explaining how to fix a missing API key
fn load_config(host: Option<String>, port: Option<u16>) -> Result<AppConfig> {
    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e @ ChatDigestError::MissingCredential { .. }) => {
            eprintln!("{}", credential_report(&e));
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    // CLI arguments override the environment
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }
    config.validate()?;

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let (host, port) = match cli.command {
        Some(Commands::Serve { host, port }) => (host, port),
        None => (None, None),
    };

    // Nothing below runs without a credential
    let config = load_config(host, port)?;

    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("ChatDigest starting...");
    tracing::info!("Configuration loaded:");
    tracing::info!("  Endpoint: {}", config.openai_base_url);
    tracing::info!("  Model: {}", config.llm_model);
    tracing::info!("  Bind: {}", config.server_bind_address());

    let provider = Arc::new(OpenAiClient::new(&config)?);

    println!("Server listening on http://{}", config.server_bind_address());

    chatdigest_server::start_server(config, provider).await?;

    Ok(())
}
