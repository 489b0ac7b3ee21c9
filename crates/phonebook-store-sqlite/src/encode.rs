//! Row decoding between SQLite columns and [`Contact`].
//!
//! `is_favorite` is stored as an integer (0/1); any non-zero value reads as
//! `true`. A NULL `order_index` (possible only in pre-upgrade rows) reads as 0.

use phonebook_core::contact::Contact;
use rusqlite::Row;

/// Column list matching [`contact_from_row`]; keep the two in sync.
pub const CONTACT_COLUMNS: &str = "id, name, phone, is_favorite, order_index";

pub fn contact_from_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
  Ok(Contact {
    id:          row.get(0)?,
    name:        row.get(1)?,
    phone:       row.get(2)?,
    is_favorite: row.get::<_, Option<i64>>(3)?.unwrap_or(0) != 0,
    order_index: row.get::<_, Option<i64>>(4)?.unwrap_or(0),
  })
}
