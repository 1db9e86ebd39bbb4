//! `GET /download` — CSV export of the full ticket set.

use axum::{
  extract::State,
  http::header,
  response::IntoResponse,
};
use gripe_core::store::TicketStore;
use gripe_notify::Notify;

use crate::{AppState, error::Error, handlers::listing::TicketRow};

/// `GET /download`
///
/// Writes all tickets (ascending by id) to the configured export path —
/// the file is transient and overwritten on every call — and returns the
/// same bytes as a `text/csv` attachment.
pub async fn download<S, N>(
  State(state): State<AppState<S, N>>,
) -> Result<impl IntoResponse, Error>
where
  S: TicketStore,
  S::Error: std::error::Error + Send + Sync + 'static,
  N: Notify,
{
  let tickets = state.store.list().await.map_err(Error::store)?;

  // Header is written explicitly so an empty ticket set still exports a
  // well-formed file.
  let mut wtr = csv::WriterBuilder::new()
    .has_headers(false)
    .from_writer(Vec::new());
  wtr.write_record(TicketRow::HEADER)?;
  for ticket in &tickets {
    wtr.serialize(TicketRow::from(ticket))?;
  }
  let bytes = wtr
    .into_inner()
    .map_err(|e| Error::Export(e.into_error()))?;

  tokio::fs::write(&state.config.export_path, &bytes)
    .await
    .map_err(Error::Export)?;
  tracing::info!(
    rows = tickets.len(),
    path = %state.config.export_path.display(),
    "csv export written",
  );

  Ok((
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
      (header::CONTENT_DISPOSITION, "attachment; filename=\"log.csv\""),
    ],
    bytes,
  ))
}
