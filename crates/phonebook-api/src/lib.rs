//! JSON REST API for the phonebook.
//!
//! Exposes an axum [`Router`] backed by any
//! [`phonebook_core::store::ContactStore`]. TLS, CORS, and request tracing are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", phonebook_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, put},
};
use phonebook_core::store::ContactStore;
use tower_http::catch_panic::CatchPanicLayer;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Handler panics are turned into 500 responses.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>))
    .route("/contacts/order", put(contacts::set_order::<S>))
    .route("/contacts/{id}", delete(contacts::delete_one::<S>))
    .route("/contacts/{id}/favorite", put(contacts::toggle_favorite::<S>))
    .with_state(store)
    .layer(CatchPanicLayer::custom(error::panic_response))
}
