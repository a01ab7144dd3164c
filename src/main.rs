//! Linkeeper main entry point
//!
//! This is the command-line interface for the Linkeeper bookmark bot.

use anyhow::Context;
use clap::{Parser, Subcommand};
use linkeeper::bot::{self, Command, Dispatcher, TelegramClient};
use linkeeper::config::{bot_token, load_config_or_default, Config, TOKEN_ENV_VAR};
use linkeeper::storage::{open_store, SqliteStore};
use linkeeper::title::HttpTitleFetcher;
use linkeeper::BookmarkService;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Linkeeper: a conversational bookmark keeper
///
/// Runs a Telegram bot that saves links you send it, tagged with any
/// #hashtags in the message. The same operations are available locally
/// through the subcommands.
#[derive(Parser, Debug)]
#[command(name = "linkeeper")]
#[command(version)]
#[command(about = "A conversational bookmark keeper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Run the Telegram bot (reads the token from TG_TOKEN)
    Serve,

    /// Save the first URL in TEXT, tagged with its #hashtags
    Add {
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
    },

    /// List all bookmarks
    Ls,

    /// Search bookmarks by keyword, URL or #tag
    Se {
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Remove bookmarks by ID
    Rm {
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(path) = &cli.config {
        tracing::info!("Configuration loaded from: {}", path.display());
    }

    let dispatcher = build_dispatcher(&config)?;

    match cli.command.unwrap_or(Mode::Serve) {
        Mode::Serve => handle_serve(&config, dispatcher).await?,
        Mode::Add { text } => print_replies(&dispatcher, Command::Add(text.join(" "))).await,
        Mode::Ls => print_replies(&dispatcher, Command::List).await,
        Mode::Se { text } => print_replies(&dispatcher, Command::Search(text.join(" "))).await,
        Mode::Rm { ids } => print_replies(&dispatcher, Command::Remove(ids)).await,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkeeper=info,warn"),
            1 => EnvFilter::new("linkeeper=debug,info"),
            2 => EnvFilter::new("linkeeper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Opens the store and wires the service together
fn build_dispatcher(
    config: &Config,
) -> anyhow::Result<Dispatcher<SqliteStore, HttpTitleFetcher>> {
    let db_path = Path::new(&config.storage.database_path);
    let store = open_store(db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let fetcher = HttpTitleFetcher::new(&config.fetcher).context("Failed to build HTTP client")?;
    let service = BookmarkService::new(store, fetcher, config.storage.delimiter());

    Ok(Dispatcher::new(service))
}

/// Runs the Telegram bot until interrupted
async fn handle_serve(
    config: &Config,
    dispatcher: Dispatcher<SqliteStore, HttpTitleFetcher>,
) -> anyhow::Result<()> {
    let token = bot_token(std::env::var(TOKEN_ENV_VAR).ok())?;

    let client = TelegramClient::new(&config.telegram, &token)?;

    match bot::run(client, dispatcher).await {
        Ok(()) => {
            tracing::info!("Bot stopped");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Bot failed: {}", e);
            Err(e.into())
        }
    }
}

/// Runs one command locally and prints its replies
async fn print_replies(dispatcher: &Dispatcher<SqliteStore, HttpTitleFetcher>, command: Command) {
    for reply in dispatcher.dispatch(command, None).await {
        println!("{}", reply);
    }
}
