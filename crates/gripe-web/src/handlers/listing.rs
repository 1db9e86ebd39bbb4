//! `GET /viewlog` and `GET /fetch` — the full-log listing.
//!
//! `/fetch` returns every ticket as a display-oriented row with validity
//! and entry date stringified. [`TicketRow`]'s field order is the display
//! order shared with the CSV export; the two must never diverge.

use axum::{
  Json,
  extract::State,
  response::Html,
};
use gripe_core::{store::TicketStore, ticket::Ticket};
use gripe_notify::Notify;
use serde::Serialize;

use crate::{AppState, error::Error, views};

// ─── Display row ─────────────────────────────────────────────────────────────

/// A ticket reshaped for display. Serialised field order is the column
/// order of both the JSON listing and the CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct TicketRow {
  pub id:         i64,
  pub validity:   String,
  pub entry_date: String,
  pub complaint:  String,
  pub response:   String,
}

impl TicketRow {
  /// Header record for the CSV export; must match the serialised field
  /// order above.
  pub const HEADER: [&'static str; 5] =
    ["id", "validity", "entry_date", "complaint", "response"];
}

impl From<&Ticket> for TicketRow {
  fn from(t: &Ticket) -> Self {
    Self {
      id:         t.id,
      validity:   t.validity.as_str().to_owned(),
      entry_date: t.entry_date.format("%Y-%m-%d %H:%M:%S").to_string(),
      complaint:  t.complaint.clone(),
      response:   t.response.clone(),
    }
  }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

/// `GET /viewlog`
pub async fn page() -> Html<String> { Html(views::viewlog_page()) }

/// `GET /fetch` — JSON array of all tickets, ascending by id.
pub async fn fetch<S, N>(
  State(state): State<AppState<S, N>>,
) -> Result<Json<Vec<TicketRow>>, Error>
where
  S: TicketStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  N: Notify,
{
  let tickets = state.store.list().await.map_err(Error::store)?;
  Ok(Json(tickets.iter().map(TicketRow::from).collect()))
}
