//! Error types and axum `IntoResponse` implementation.
//!
//! User-facing conditions (empty update text, unknown ticket id) render a
//! plain message page with a navigation link at HTTP 200 — intake staff see
//! a sentence, not a stack trace. Backend faults surface as 500 and are
//! logged.

use axum::{
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use gripe_core::ticket::{TicketId, UpdateField};
use thiserror::Error;

use crate::views;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no information entered to update {0}")]
  EmptyUpdate(UpdateField),

  #[error("ticket {0} not found")]
  TicketNotFound(TicketId),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("export write error: {0}")]
  Export(#[source] std::io::Error),
}

impl Error {
  /// Wrap a backend error from any [`gripe_core::store::TicketStore`].
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

impl From<gripe_core::Error> for Error {
  fn from(e: gripe_core::Error) -> Self {
    match e {
      gripe_core::Error::EmptyUpdate(field) => Self::EmptyUpdate(field),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::EmptyUpdate(field) => Html(views::message_page(
        &format!("No information entered to update {field}."),
        "/",
        "Go back",
      ))
      .into_response(),
      Error::TicketNotFound(_) => {
        Html(views::message_page("Complaint not found.", "/", "Go back"))
          .into_response()
      }
      Error::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
      }
      Error::Csv(e) => {
        tracing::error!(error = %e, "csv export failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
      }
      Error::Export(e) => {
        tracing::error!(error = %e, "export file write failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
      }
    }
  }
}
