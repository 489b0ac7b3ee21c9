//! Integration tests for `SqliteStore` against in-memory and on-disk databases.

use phonebook_core::{
  contact::{Contact, NewContact},
  ordering::{OrderAssignment, assign_positions, display_cmp},
  store::ContactStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_contact(name: &str, phone: &str, is_favorite: bool) -> NewContact {
  NewContact::new(name, phone, is_favorite).expect("valid contact")
}

async fn add(s: &SqliteStore, name: &str, is_favorite: bool) -> Contact {
  s.add_contact(new_contact(name, "+7 (999) 111-22-33", is_favorite))
    .await
    .unwrap()
}

async fn listed_ids(s: &SqliteStore) -> Vec<i64> {
  s.list_contacts()
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.id)
    .collect()
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_returns_stored_row() {
  let s = store().await;

  let c = s
    .add_contact(new_contact("Иван Иванов", "+7 (999) 111-22-33", true))
    .await
    .unwrap();
  assert_eq!(c.name, "Иван Иванов");
  assert_eq!(c.phone, "+7 (999) 111-22-33");
  assert!(c.is_favorite);
  assert_eq!(c.order_index, 1);

  let fetched = s.get_contact(c.id).await.unwrap();
  assert_eq!(fetched, Some(c));
}

#[tokio::test]
async fn sequential_adds_get_increasing_order_index() {
  let s = store().await;
  let mut created = Vec::new();
  for name in ["A", "B", "C", "D"] {
    created.push(add(&s, name, false).await);
  }

  let indices: Vec<i64> = created.iter().map(|c| c.order_index).collect();
  assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");

  let expected: Vec<i64> = created.iter().map(|c| c.id).collect();
  assert_eq!(listed_ids(&s).await, expected);
}

#[tokio::test]
async fn add_continues_after_highest_order_index() {
  let s = store().await;
  let a = add(&s, "A", false).await;
  s.set_order(vec![OrderAssignment { id: a.id, order_index: 41 }])
    .await
    .unwrap();

  let b = add(&s, "B", false).await;
  assert_eq!(b.order_index, 42);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let s = store().await;
  let a = add(&s, "A", false).await;
  let b = add(&s, "B", false).await;
  assert!(s.delete_contact(b.id).await.unwrap());

  let c = add(&s, "C", false).await;
  assert!(c.id > b.id);
  assert_ne!(c.id, a.id);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get_contact(999).await.unwrap().is_none());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_lists_nothing() {
  let s = store().await;
  assert!(s.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn favorites_list_first() {
  let s = store().await;
  let ivan  = add(&s, "Иван Иванов", true).await;
  let petr  = add(&s, "Петр Петров", false).await;
  let maria = add(&s, "Мария Сидорова", false).await;
  let anna  = add(&s, "Анна Козлова", true).await;

  assert_eq!(listed_ids(&s).await, vec![ivan.id, anna.id, petr.id, maria.id]);
}

#[tokio::test]
async fn favorite_precedes_even_with_larger_order_index() {
  let s = store().await;
  let a = add(&s, "A", false).await;
  let b = add(&s, "B", false).await;
  s.toggle_favorite(b.id).await.unwrap();
  s.set_order(vec![
    OrderAssignment { id: b.id, order_index: 1000 },
    OrderAssignment { id: a.id, order_index: -5 },
  ])
  .await
  .unwrap();

  assert_eq!(listed_ids(&s).await, vec![b.id, a.id]);
}

#[tokio::test]
async fn name_breaks_order_index_ties() {
  let s = store().await;
  let zed   = add(&s, "Zed", false).await;
  let alpha = add(&s, "alpha", false).await;
  let bravo = add(&s, "Bravo", false).await;
  s.set_order(
    [zed.id, alpha.id, bravo.id]
      .into_iter()
      .map(|id| OrderAssignment { id, order_index: 7 })
      .collect(),
  )
  .await
  .unwrap();

  // BINARY collation: uppercase sorts before lowercase.
  assert_eq!(listed_ids(&s).await, vec![bravo.id, zed.id, alpha.id]);
}

#[tokio::test]
async fn listing_agrees_with_display_cmp() {
  let s = store().await;
  let names = ["e", "B", "a", "D", "c", "b"];
  let mut ids = Vec::new();
  for (i, name) in names.iter().enumerate() {
    ids.push(add(&s, name, i % 3 == 0).await.id);
  }
  // Leave some indices tied so the name and id tie-breakers are exercised.
  s.set_order(
    ids
      .iter()
      .enumerate()
      .map(|(i, &id)| OrderAssignment { id, order_index: (i as i64) % 2 })
      .collect(),
  )
  .await
  .unwrap();

  let listed = s.list_contacts().await.unwrap();
  let mut sorted = listed.clone();
  sorted.sort_by(display_cmp);
  assert_eq!(listed, sorted);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_twice_reports_missing_second_time() {
  let s = store().await;
  let a = add(&s, "A", false).await;

  assert!(s.delete_contact(a.id).await.unwrap());
  assert!(!s.delete_contact(a.id).await.unwrap());
  assert!(s.get_contact(a.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_leaves_others() {
  let s = store().await;
  let a = add(&s, "A", false).await;

  assert!(!s.delete_contact(a.id + 100).await.unwrap());
  assert_eq!(listed_ids(&s).await, vec![a.id]);
}

// ─── Favorite toggle ─────────────────────────────────────────────────────────

#[tokio::test]
async fn toggle_twice_restores_original() {
  let s = store().await;
  let a = add(&s, "A", false).await;

  let once = s.toggle_favorite(a.id).await.unwrap().unwrap();
  assert!(once.is_favorite);
  assert_eq!(once.order_index, a.order_index);

  let twice = s.toggle_favorite(a.id).await.unwrap().unwrap();
  assert!(!twice.is_favorite);
  assert_eq!(twice, a);
}

#[tokio::test]
async fn toggle_missing_returns_none() {
  let s = store().await;
  assert!(s.toggle_favorite(12).await.unwrap().is_none());
}

// ─── Reorder ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn apply_order_reproduces_sequence() {
  let s = store().await;
  let a = add(&s, "A", false).await;
  let b = add(&s, "B", false).await;
  let c = add(&s, "C", false).await;

  let updated = s
    .set_order(assign_positions(&[c.id, a.id, b.id]))
    .await
    .unwrap();
  assert_eq!(updated, 3);
  assert_eq!(listed_ids(&s).await, vec![c.id, a.id, b.id]);

  let stored = s.get_contact(c.id).await.unwrap().unwrap();
  assert_eq!(stored.order_index, 0);
}

#[tokio::test]
async fn set_order_skips_unknown_ids() {
  let s = store().await;
  let a = add(&s, "A", false).await;
  let b = add(&s, "B", false).await;

  let updated = s
    .set_order(assign_positions(&[b.id, 404, a.id]))
    .await
    .unwrap();
  assert_eq!(updated, 2);
  assert_eq!(listed_ids(&s).await, vec![b.id, a.id]);
}

#[tokio::test]
async fn reorder_keeps_favorite_status() {
  let s = store().await;
  let a = add(&s, "A", true).await;
  let b = add(&s, "B", false).await;

  s.set_order(assign_positions(&[b.id, a.id])).await.unwrap();

  let contacts = s.list_contacts().await.unwrap();
  assert_eq!(contacts[0].id, a.id);
  assert!(contacts[0].is_favorite);
  assert!(!contacts[1].is_favorite);
}

// ─── Schema upgrade ──────────────────────────────────────────────────────────

#[tokio::test]
async fn legacy_table_gains_order_index() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("legacy.db");
  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn
      .execute_batch(
        "CREATE TABLE contacts (
           id          INTEGER PRIMARY KEY AUTOINCREMENT,
           name        TEXT NOT NULL,
           phone       TEXT NOT NULL,
           is_favorite BOOLEAN DEFAULT 0
         );
         INSERT INTO contacts (name, phone) VALUES ('Old', '+7 (999) 111-22-33');
         INSERT INTO contacts (name, phone, is_favorite)
           VALUES ('Older', '+7 (999) 222-33-44', 1);",
      )
      .unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  let contacts = s.list_contacts().await.unwrap();
  assert_eq!(contacts.len(), 2);
  for c in &contacts {
    assert_eq!(c.order_index, c.id);
  }
  assert_eq!(contacts[0].name, "Older");

  let next = add(&s, "New", false).await;
  assert_eq!(next.order_index, 3);
}

#[tokio::test]
async fn reopen_preserves_contacts_and_custom_order() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("phonebook.db");

  let (a, b) = {
    let s = SqliteStore::open(&path).await.unwrap();
    let a = add(&s, "A", false).await;
    let b = add(&s, "B", false).await;
    s.set_order(vec![
      OrderAssignment { id: a.id, order_index: 9 },
      OrderAssignment { id: b.id, order_index: 5 },
    ])
    .await
    .unwrap();
    (a, b)
  };

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(listed_ids(&s).await, vec![b.id, a.id]);
}

#[tokio::test]
async fn reopen_backfills_zero_order_index() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("phonebook.db");

  let first = {
    let s = SqliteStore::open(&path).await.unwrap();
    let first = add(&s, "A", false).await;
    add(&s, "B", false).await;
    s.set_order(assign_positions(&[first.id])).await.unwrap();
    first
  };

  // Index 0 is the "unset" sentinel, so the next open rewrites it to the id.
  let s = SqliteStore::open(&path).await.unwrap();
  let again = s.get_contact(first.id).await.unwrap().unwrap();
  assert_eq!(again.order_index, first.id);
}
