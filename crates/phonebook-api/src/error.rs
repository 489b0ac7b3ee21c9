//! API error type and [`axum::response::IntoResponse`] implementation.

use std::any::Any;

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler. Rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  Validation(String),

  #[error("{0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// Anything that is neither a client mistake nor a storage failure.
  #[error("unexpected error: {0}")]
  Unexpected(String),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Store(_) | ApiError::Unexpected(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}

impl From<phonebook_core::Error> for ApiError {
  fn from(e: phonebook_core::Error) -> Self { ApiError::Validation(e.to_string()) }
}

impl From<JsonRejection> for ApiError {
  fn from(r: JsonRejection) -> Self {
    match r {
      // The body could not even be read; not the client's JSON at fault.
      JsonRejection::BytesRejection(e) => ApiError::Unexpected(e.body_text()),
      other => ApiError::Validation(other.body_text()),
    }
  }
}

impl From<PathRejection> for ApiError {
  fn from(r: PathRejection) -> Self { ApiError::Validation(r.body_text()) }
}

impl From<QueryRejection> for ApiError {
  fn from(r: QueryRejection) -> Self { ApiError::Validation(r.body_text()) }
}

/// Response for a handler that panicked; installed via `CatchPanicLayer`.
pub(crate) fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = err.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = err.downcast_ref::<&str>() {
    (*s).to_owned()
  } else {
    "handler panicked".to_owned()
  };
  ApiError::Unexpected(detail).into_response()
}
