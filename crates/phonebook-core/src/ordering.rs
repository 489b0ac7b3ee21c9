//! The display-order contract.
//!
//! Favorites come first; within each partition contacts sort by ascending
//! `order_index`, then by name (codepoint order), then by id. Store backends
//! must return [`crate::store::ContactStore::list_contacts`] in exactly this
//! order.

use std::cmp::Ordering;

use crate::contact::{Contact, ContactId};

/// One explicit `order_index` write produced by a reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAssignment {
  pub id:          ContactId,
  pub order_index: i64,
}

/// Total order used for listing.
pub fn display_cmp(a: &Contact, b: &Contact) -> Ordering {
  b.is_favorite
    .cmp(&a.is_favorite)
    .then_with(|| a.order_index.cmp(&b.order_index))
    .then_with(|| a.name.cmp(&b.name))
    .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_for_display(contacts: &mut [Contact]) {
  contacts.sort_by(display_cmp);
}

/// Map each id to its 0-based position in `ordered_ids`.
///
/// Assignments come back in input order, so a repeated id ends up with the
/// position of its last occurrence once they are applied in sequence.
pub fn assign_positions(ordered_ids: &[ContactId]) -> Vec<OrderAssignment> {
  (0_i64..)
    .zip(ordered_ids)
    .map(|(order_index, &id)| OrderAssignment { id, order_index })
    .collect()
}
