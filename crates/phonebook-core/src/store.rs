//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `phonebook-store-sqlite`). The HTTP layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  contact::{Contact, ContactId, NewContact},
  ordering::OrderAssignment,
};

/// Abstraction over a phonebook storage backend.
///
/// Every method is one atomic unit: it either applies completely or leaves
/// the store untouched. "Not found" is reported through the return value
/// (`false` / `None`), never through `Self::Error`, which is reserved for
/// storage failures.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new contact with `order_index` one past the current maximum
  /// (or 1 for an empty store) and return the stored row.
  fn add_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// All contacts in display order (see [`crate::ordering::display_cmp`]).
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get_contact(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Remove a contact. Returns `false` if no contact has that id.
  fn delete_contact(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Flip `is_favorite` and return the updated contact, or `None` if absent.
  fn toggle_favorite(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Overwrite `order_index` for each assignment whose id exists; unknown ids
  /// are skipped. Returns how many contacts were updated.
  fn set_order(
    &self,
    assignments: Vec<OrderAssignment>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
