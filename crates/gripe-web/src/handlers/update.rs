//! The three append-only update endpoints.
//!
//! Each validates its fragment before touching the store, so a rejected
//! update leaves the ticket unchanged. The appended suffix carries an
//! inline `UPDATED <timestamp>` marker; prior text is never truncated.

use axum::{Form, Json, extract::State, response::Html};
use chrono::Utc;
use gripe_core::{
  store::TicketStore,
  ticket::{TicketId, UpdateField, update_fragment, validate_fragment},
};
use gripe_notify::Notify;
use serde::Deserialize;

use crate::{AppState, error::Error, views};

// ─── Update complaint ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ComplaintForm {
  pub update_complaint: String,
  pub id:               TicketId,
}

/// `POST /update_complaint`
pub async fn complaint<S, N>(
  State(state): State<AppState<S, N>>,
  Form(form): Form<ComplaintForm>,
) -> Result<Html<String>, Error>
where
  S: TicketStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  N: Notify,
{
  validate_fragment(UpdateField::Complaint, &form.update_complaint)?;

  let fragment = update_fragment(Utc::now(), &form.update_complaint);
  state
    .store
    .append_complaint(form.id, &fragment)
    .await
    .map_err(Error::store)?
    .ok_or(Error::TicketNotFound(form.id))?;

  tracing::info!(id = form.id, "complaint updated");
  Ok(Html(views::message_page(
    "Complaint updated.",
    &format!("/view?id={}", form.id),
    "Go back",
  )))
}

// ─── Update response ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResponseForm {
  pub update_response: String,
  pub id:              TicketId,
}

/// `POST /update_response` — writes the response column only.
pub async fn response<S, N>(
  State(state): State<AppState<S, N>>,
  Form(form): Form<ResponseForm>,
) -> Result<Html<String>, Error>
where
  S: TicketStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  N: Notify,
{
  validate_fragment(UpdateField::Response, &form.update_response)?;

  let fragment = update_fragment(Utc::now(), &form.update_response);
  state
    .store
    .append_response(form.id, &fragment)
    .await
    .map_err(Error::store)?
    .ok_or(Error::TicketNotFound(form.id))?;

  tracing::info!(id = form.id, "action taken updated");
  Ok(Html(views::message_page(
    "Action taken updated.",
    &format!("/view?id={}", form.id),
    "Go back",
  )))
}

// ─── Update both ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BothBody {
  pub ticket_id: TicketId,
  pub complaint: String,
  pub response:  String,
}

/// `POST /update_both` — JSON body; appends to both fields in one store
/// transaction.
pub async fn both<S, N>(
  State(state): State<AppState<S, N>>,
  Json(body): Json<BothBody>,
) -> Result<Html<String>, Error>
where
  S: TicketStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  N: Notify,
{
  validate_fragment(UpdateField::Complaint, &body.complaint)?;
  validate_fragment(UpdateField::Response, &body.response)?;

  let now = Utc::now();
  state
    .store
    .append_both(
      body.ticket_id,
      &update_fragment(now, &body.complaint),
      &update_fragment(now, &body.response),
    )
    .await
    .map_err(Error::store)?
    .ok_or(Error::TicketNotFound(body.ticket_id))?;

  tracing::info!(id = body.ticket_id, "complaint and action taken updated");
  Ok(Html(views::message_page(
    "Complaint updated.",
    &format!("/view?id={}", body.ticket_id),
    "Go back",
  )))
}
