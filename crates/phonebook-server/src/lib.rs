//! HTTP server assembly for the phonebook.
//!
//! Owns configuration loading and the outer middleware stack; the routes
//! themselves live in `phonebook-api`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use phonebook_core::store::ContactStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Layered lowest to highest: built-in defaults, the optional TOML file, then
/// `PHONEBOOK_*` environment variables (e.g. `PHONEBOOK_PORT=8080`).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  pub database_path:   PathBuf,
  /// Allow cross-origin requests from any origin.
  pub cors_permissive: bool,
}

impl ServerConfig {
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 5000)?
      .set_default("database_path", "phonebook.db")?
      .set_default("cors_permissive", true)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("PHONEBOOK").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The complete application: the JSON API under `/api`, request tracing, and
/// CORS when enabled.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: ContactStore + 'static,
{
  let router = Router::new()
    .nest("/api", phonebook_api::api_router(store))
    .layer(TraceLayer::new_for_http());

  if config.cors_permissive {
    router.layer(CorsLayer::permissive())
  } else {
    router
  }
}
