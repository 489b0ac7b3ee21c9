//! Error types for `phonebook-core`.

use thiserror::Error;

/// Input rejected before it reaches a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("name must not be empty")]
  EmptyName,

  #[error("invalid phone number {0:?}; expected format +7 (999) 999-99-99")]
  InvalidPhone(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
