//! The contact record, the only entity in the phonebook.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, phone::PhoneNumber};

/// Store-assigned identifier. Never reused after deletion.
pub type ContactId = i64;

/// A persisted contact, exactly as it is serialised on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:          ContactId,
  pub name:        String,
  pub phone:       String,
  pub is_favorite: bool,
  /// Sort key within the favorite partition; not a dense rank.
  pub order_index: i64,
}

/// Validated input to [`crate::store::ContactStore::add_contact`].
/// `id` and `order_index` are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  pub name:        String,
  pub phone:       PhoneNumber,
  pub is_favorite: bool,
}

impl NewContact {
  /// Trim and validate raw user input.
  pub fn new(name: &str, phone: &str, is_favorite: bool) -> Result<Self> {
    let name = name.trim();
    if name.is_empty() {
      return Err(Error::EmptyName);
    }
    Ok(Self {
      name: name.to_owned(),
      phone: PhoneNumber::parse(phone.trim())?,
      is_favorite,
    })
  }
}
