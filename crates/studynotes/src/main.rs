use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use studynotes_common::{logger, AppConfig};
use studynotes_llm::{SummarizeRequest, Summarizer};
use studynotes_server::types::title_from_file_name;

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
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "studynotes")]
#[command(about = "Study notes - LLM-powered Markdown summaries for lecture notes", long_about = None)]
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

        /// Data directory for notes and uploads
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Summarize a local text or Markdown file
    Summarize {
        /// File to summarize
        file: PathBuf,

        /// Title attached to the request (defaults to the file name)
        #[arg(long)]
        title: Option<String>,

        /// Write the summary here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // AppConfig::from_env() also loads .env, but CLI overrides must land after it
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port, data_dir }) => {
            if let Some(host) = &host {
                std::env::set_var("SERVER_HOST", host);
            }
            if let Some(port) = port {
                std::env::set_var("SERVER_PORT", port.to_string());
            }
            if let Some(dir) = &data_dir {
                std::env::set_var("DATA_DIR", dir);
            }

            serve().await?;
        }
        Some(Commands::Summarize { file, title, output }) => {
            summarize(file, title, output).await?;
        }
        None => serve().await?,
    }

    Ok(())
}

async fn serve() -> Result<()> {
    let config = AppConfig::from_env()?;
    logger::setup_logging(&config)?;

    tracing::info!("Study notes server starting...");
    tracing::info!("  Address: {}", config.server_bind_address());
    tracing::info!("  Data: {}", config.data_dir.display());

    studynotes_server::start_server(config).await?;
    Ok(())
}

async fn summarize(file: PathBuf, title: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    logger::setup_stderr_logging(&log_level)?;

    let text = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let title = title.unwrap_or_else(|| {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        title_from_file_name(&name)
    });

    let result = Summarizer::from_env()
        .summarize(&SummarizeRequest::new(text).with_title(title))
        .await?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, &result.summary)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Summary written to {}", path.display());
        }
        None => println!("{}", result.summary),
    }

    Ok(())
}
