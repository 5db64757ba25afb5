use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stringscope::config::Config;

#[derive(Parser)]
#[command(name = "stringscope", about = "Analyse strings and filter them in plain English")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    debug: bool,

    /// Extra config file layered over ~/.config/stringscope/config.toml.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API.
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        /// Mirror the store to this JSON file.
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Analyse a string and print its record as JSON.
    Analyze { value: String },
    /// Translate a natural-language query and print the parsed filters as JSON.
    Translate { query: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match (&cli.command, &cli.config) {
        (Command::Serve { .. }, explicit) => Config::load(explicit.as_deref())?,
        (_, Some(explicit)) => Config::from_file(explicit)?,
        (_, None) => Config::defaults(),
    };
    init_tracing(cli.debug, &config);

    match cli.command {
        Command::Serve {
            host,
            port,
            snapshot,
        } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if snapshot.is_some() {
                config.storage.snapshot_path = snapshot;
            }
            let store = stringscope::open_store(&config.storage)?;
            stringscope::server::serve(&config.server, store).await?;
        }
        Command::Analyze { value } => {
            let record = stringscope::analyze(&value);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Translate { query } => {
            let parsed = stringscope::translate(&query);
            if parsed.is_empty() {
                tracing::warn!(%query, "no phrase rule matched; filter is empty");
            }
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
    }

    Ok(())
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
fn init_tracing(debug: bool, config: &Config) {
    let fallback = if debug { "debug" } else { config.logging.filter.as_str() };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .init();
}
