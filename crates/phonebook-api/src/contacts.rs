//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | Optional `?search=`; display order, favorites first |
//! | `POST`   | `/contacts` | Body: [`CreateBody`]; returns 201 + stored contact |
//! | `DELETE` | `/contacts/{id}` | 404 if not found |
//! | `PUT`    | `/contacts/{id}/favorite` | Flips `is_favorite`; returns the contact |
//! | `PUT`    | `/contacts/order` | Body: `{"contact_ids":[3,1,2]}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use phonebook_core::{
  contact::{Contact, ContactId, NewContact},
  ordering::assign_positions,
  search::SearchQuery,
  store::ContactStore,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Matched against names (case-insensitive) and phone digits.
  pub search: Option<String>,
}

/// `GET /contacts[?search=<text>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let Query(params) = params?;
  let contacts = store
    .list_contacts()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let contacts = match params.search.as_deref().and_then(SearchQuery::parse) {
    Some(query) => query.filter(contacts),
    None => contacts,
  };
  Ok(Json(contacts))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /contacts`.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name:        Option<String>,
  /// Must be `+7 (999) 999-99-99` after trimming.
  pub phone:       Option<String>,
  /// A JSON boolean; other types are rejected.
  pub is_favorite: Option<bool>,
}

/// `POST /contacts`: returns 201 + the stored [`Contact`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let Json(body) = body?;
  let (Some(name), Some(phone)) = (body.name, body.phone) else {
    return Err(ApiError::Validation(
      "fields name and phone are required".to_owned(),
    ));
  };
  let input = NewContact::new(&name, &phone, body.is_favorite.unwrap_or(false))?;

  let contact = store
    .add_contact(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  tracing::info!(id = contact.id, "contact created");
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<ContactId>, PathRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
{
  let Path(id) = id?;
  let removed = store
    .delete_contact(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !removed {
    return Err(not_found(id));
  }
  tracing::info!(id, "contact deleted");
  Ok(Json(json!({ "message": "contact deleted" })))
}

// ─── Favorite ─────────────────────────────────────────────────────────────────

/// `PUT /contacts/{id}/favorite`
pub async fn toggle_favorite<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<ContactId>, PathRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let Path(id) = id?;
  let contact = store
    .toggle_favorite(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(contact))
}

// ─── Order ────────────────────────────────────────────────────────────────────

/// `PUT /contacts/order`, body: `{"contact_ids":[...]}`.
///
/// Each id's `order_index` becomes its position in the array. Ids with no
/// matching contact are ignored.
pub async fn set_order<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
{
  let Json(body) = body?;
  let ids = parse_contact_ids(&body)?;

  let updated = store
    .set_order(assign_positions(&ids))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if updated < ids.len() {
    tracing::warn!(requested = ids.len(), updated, "reorder skipped unknown contact ids");
  }
  Ok(Json(json!({ "message": "contact order updated" })))
}

fn parse_contact_ids(body: &Value) -> Result<Vec<ContactId>, ApiError> {
  let raw = body
    .get("contact_ids")
    .ok_or_else(|| ApiError::Validation("contact_ids array is required".to_owned()))?;
  let items = raw
    .as_array()
    .ok_or_else(|| ApiError::Validation("contact_ids must be an array".to_owned()))?;
  items
    .iter()
    .enumerate()
    .map(|(i, v)| {
      v.as_i64().ok_or_else(|| {
        ApiError::Validation(format!("contact_ids[{i}] must be an integer id"))
      })
    })
    .collect()
}

fn not_found(id: ContactId) -> ApiError {
  ApiError::NotFound(format!("contact {id} not found"))
}
