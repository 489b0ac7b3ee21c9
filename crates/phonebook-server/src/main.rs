//! phonebook server binary.
//!
//! Reads `phonebook.toml` (or the path specified with `--config`), opens the
//! SQLite store, and serves the JSON API over HTTP.
//!
//! ```
//! cargo run -p phonebook-server -- --config phonebook.toml
//! PHONEBOOK_PORT=8080 cargo run -p phonebook-server
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use phonebook_server::ServerConfig;
use phonebook_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Phonebook contact-list server")]
struct Cli {
  /// Path to the TOML configuration file. Missing files are ignored.
  #[arg(short, long, default_value = "phonebook.toml")]
  config: PathBuf,

  /// Override the configured SQLite database path.
  #[arg(long)]
  database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;
  if let Some(database) = cli.database {
    server_cfg.database_path = database;
  }

  let store = SqliteStore::open(&server_cfg.database_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.database_path)
    })?;

  let app = phonebook_server::app(Arc::new(store), &server_cfg);
  let address = server_cfg.address();

  tracing::info!(database = ?server_cfg.database_path, "Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
