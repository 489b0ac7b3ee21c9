//! [`SqliteStore`], the SQLite implementation of [`ContactStore`].

use std::path::Path;

use phonebook_core::{
  contact::{Contact, ContactId, NewContact},
  ordering::OrderAssignment,
  store::ContactStore,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Result,
  encode::{CONTACT_COLUMNS, contact_from_row},
  schema::migrate,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A phonebook store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Each
/// operation runs inside one transaction on the connection's worker thread,
/// so operations are serialised and a failed one is rolled back on drop.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run the startup migration.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    let report = self.conn.call(|conn| Ok(migrate(conn)?)).await?;
    if report.added_order_index {
      tracing::info!("added order_index column to contacts table");
    }
    tracing::debug!(rows = report.backfilled_rows, "backfilled order_index");
    Ok(())
  }
}

fn select_by_id(
  conn: &rusqlite::Connection,
  id: ContactId,
) -> rusqlite::Result<Option<Contact>> {
  conn
    .query_row(
      &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
      rusqlite::params![id],
      contact_from_row,
    )
    .optional()
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = crate::Error;

  async fn add_contact(&self, input: NewContact) -> Result<Contact> {
    let NewContact { name, phone, is_favorite } = input;
    let phone = phone.into_inner();

    let contact = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let order_index: i64 = tx.query_row(
          "SELECT COALESCE(MAX(order_index), 0) + 1 FROM contacts",
          [],
          |row| row.get(0),
        )?;
        tx.execute(
          "INSERT INTO contacts (name, phone, is_favorite, order_index)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![name, phone, is_favorite, order_index],
        )?;
        let id = tx.last_insert_rowid();
        // Read back inside the transaction; a missing row aborts the insert.
        let contact = tx.query_row(
          &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
          rusqlite::params![id],
          contact_from_row,
        )?;
        tx.commit()?;
        Ok(contact)
      })
      .await?;

    tracing::debug!(id = contact.id, order_index = contact.order_index, "contact added");
    Ok(contact)
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let contacts = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CONTACT_COLUMNS} FROM contacts
           ORDER BY is_favorite DESC, order_index ASC, name ASC, id ASC"
        ))?;
        let rows = stmt
          .query_map([], contact_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(contacts)
  }

  async fn get_contact(&self, id: ContactId) -> Result<Option<Contact>> {
    Ok(self.conn.call(move |conn| Ok(select_by_id(conn, id)?)).await?)
  }

  async fn delete_contact(&self, id: ContactId) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;
    Ok(removed > 0)
  }

  async fn toggle_favorite(&self, id: ContactId) -> Result<Option<Contact>> {
    Ok(
      self
        .conn
        .call(move |conn| {
          let tx = conn.transaction()?;
          let changed = tx.execute(
            "UPDATE contacts
             SET is_favorite = CASE WHEN is_favorite THEN 0 ELSE 1 END
             WHERE id = ?1",
            rusqlite::params![id],
          )?;
          if changed == 0 {
            return Ok(None);
          }
          let contact = select_by_id(&tx, id)?;
          tx.commit()?;
          Ok(contact)
        })
        .await?,
    )
  }

  async fn set_order(&self, assignments: Vec<OrderAssignment>) -> Result<usize> {
    Ok(
      self
        .conn
        .call(move |conn| {
          let tx = conn.transaction()?;
          let mut updated = 0;
          {
            let mut stmt = tx
              .prepare_cached("UPDATE contacts SET order_index = ?1 WHERE id = ?2")?;
            for a in &assignments {
              updated += stmt.execute(rusqlite::params![a.order_index, a.id])?;
            }
          }
          tx.commit()?;
          Ok(updated)
        })
        .await?,
    )
  }
}
