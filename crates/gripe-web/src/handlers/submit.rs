//! `GET /` and `POST /submit` — the intake form and ticket creation.

use axum::{
  Form,
  extract::State,
  response::{Html, Redirect},
};
use gripe_core::{
  store::TicketStore,
  ticket::{NewTicket, Validity},
};
use gripe_notify::Notify;
use serde::Deserialize;

use crate::{AppState, error::Error, views};

/// `GET /`
pub async fn form_page() -> Html<String> { Html(views::intake_form()) }

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
  pub complaint: String,
  pub response:  String,
  pub validity:  String,
}

/// `POST /submit`
///
/// Trims both text fields, inserts the row, and fires the creation
/// notification. The notification is non-fatal: by the time it runs the
/// ticket is committed, and a relay failure must not undo that.
pub async fn handler<S, N>(
  State(state): State<AppState<S, N>>,
  Form(form): Form<SubmitForm>,
) -> Result<Redirect, Error>
where
  S: TicketStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  N: Notify,
{
  let input = NewTicket::new(
    &form.complaint,
    &form.response,
    Validity::parse_form(&form.validity),
  );

  let ticket = state.store.create(input).await.map_err(Error::store)?;
  tracing::info!(id = ticket.id, validity = %ticket.validity, "ticket created");

  if let Err(e) = state.notifier.ticket_created(&ticket).await {
    tracing::warn!(
      id = ticket.id,
      error = %e,
      "creation notification failed; ticket persisted",
    );
  }

  // 303 so the browser re-requests the confirmation page with GET.
  Ok(Redirect::to(&format!("/thank-you?id={}", ticket.id)))
}
