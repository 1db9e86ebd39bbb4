//! `GET /thank-you` and `GET /view` — single-ticket pages.

use axum::{
  extract::{Query, State},
  response::Html,
};
use gripe_core::{store::TicketStore, ticket::TicketId};
use gripe_notify::Notify;
use serde::Deserialize;

use crate::{AppState, error::Error, views};

#[derive(Debug, Deserialize)]
pub struct IdParams {
  pub id: TicketId,
}

/// `GET /thank-you?id=`
pub async fn thank_you(Query(params): Query<IdParams>) -> Html<String> {
  Html(views::thank_you_page(params.id))
}

/// `GET /view?id=` — renders a friendly not-found page for absent ids.
pub async fn ticket<S, N>(
  State(state): State<AppState<S, N>>,
  Query(params): Query<IdParams>,
) -> Result<Html<String>, Error>
where
  S: TicketStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  N: Notify,
{
  let ticket = state
    .store
    .get(params.id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::TicketNotFound(params.id))?;

  Ok(Html(views::ticket_page(&ticket)))
}
