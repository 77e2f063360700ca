//! SiteLink CLI - Command-line interface for the SiteLink platform tools.
//!
//! Drives the notification pipeline against the real backend and push
//! gateway, invokes the admin and assistant functions, and manages the
//! local credential store. Useful for operations work and for exercising
//! the full stack without a mobile client.

mod commands;

use clap::{Parser, Subcommand};
use tracing::debug;

use sl_core::config::AppConfig;
use sl_core::error::SlResult;
use sl_core::logging;

/// SiteLink - field-service platform tools.
#[derive(Parser)]
#[command(
    name = "sitelink",
    version,
    about = "SiteLink platform CLI",
    long_about = "Command-line tools for the SiteLink field-service platform:\n\
                  drive notification fan-out, run admin operations, call the\n\
                  AI assistant, and manage locally stored credentials."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Check backend reachability and show configuration state.
    Status,
    /// Dispatch a record-creation event through the notification pipeline.
    Notify {
        #[command(subcommand)]
        action: commands::notify::NotifyAction,
    },
    /// Admin operations (password change, welcome email).
    Admin {
        #[command(subcommand)]
        action: commands::admin::AdminAction,
    },
    /// AI assistant operations (transcribe, generate, speak).
    Assistant {
        #[command(subcommand)]
        action: commands::assistant::AssistantAction,
    },
    /// Manage the local credential store.
    Creds {
        #[command(subcommand)]
        action: commands::creds::CredsAction,
    },
}

#[tokio::main]
async fn main() -> SlResult<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(std::path::Path::new(path))?,
        None => AppConfig::load_default()?,
    };

    // Verbose mode logs to the console only; otherwise log to the
    // configured file directory at the configured level.
    let _log_guard = if cli.verbose {
        logging::init_console_logging("debug");
        None
    } else {
        let log_dir = config.effective_log_dir()?;
        Some(logging::init_logging(
            &config.logging.level,
            &log_dir,
            config.logging.json_output,
        )?)
    };

    debug!("configuration loaded (backend configured: {})", config.is_backend_configured());

    match cli.command {
        Commands::Status => commands::status::run(&config, cli.format).await,
        Commands::Notify { action } => commands::notify::run(&config, action, cli.format).await,
        Commands::Admin { action } => commands::admin::run(&config, action, cli.format).await,
        Commands::Assistant { action } => {
            commands::assistant::run(&config, action, cli.format).await
        }
        Commands::Creds { action } => commands::creds::run(&config, action, cli.format).await,
    }
}
