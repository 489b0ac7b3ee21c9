//! SQL schema and startup migration for the phonebook SQLite store.
//!
//! [`migrate`] runs on every open. It is idempotent: the table is created if
//! missing, `order_index` is added to tables that predate it, and rows whose
//! `order_index` is still the 0/NULL sentinel are backfilled with their id.

use rusqlite::Connection;

/// Base DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,   -- never reused
    name        TEXT NOT NULL,
    phone       TEXT NOT NULL,
    is_favorite BOOLEAN DEFAULT 0,
    order_index INTEGER DEFAULT 0
);
";

const ADD_ORDER_INDEX: &str =
  "ALTER TABLE contacts ADD COLUMN order_index INTEGER DEFAULT 0";

// Also rewrites an order_index of 0 assigned by a reorder.
const BACKFILL_ORDER_INDEX: &str =
  "UPDATE contacts SET order_index = id WHERE order_index = 0 OR order_index IS NULL";

/// What [`migrate`] changed; reported by the caller's logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
  pub added_order_index: bool,
  pub backfilled_rows:   usize,
}

pub fn migrate(conn: &mut Connection) -> rusqlite::Result<MigrationReport> {
  conn.execute_batch(SCHEMA)?;

  let tx = conn.transaction()?;
  let added_order_index = !has_column(&tx, "contacts", "order_index")?;
  if added_order_index {
    tx.execute(ADD_ORDER_INDEX, [])?;
  }
  let backfilled_rows = tx.execute(BACKFILL_ORDER_INDEX, [])?;
  tx.commit()?;

  Ok(MigrationReport { added_order_index, backfilled_rows })
}

fn has_column(
  conn: &Connection,
  table: &str,
  column: &str,
) -> rusqlite::Result<bool> {
  let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
  let names = stmt
    .query_map([], |row| row.get::<_, String>(1))?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(names.iter().any(|n| n == column))
}
