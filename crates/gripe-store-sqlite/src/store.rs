//! [`SqliteStore`] — the SQLite implementation of [`TicketStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use gripe_core::{
  store::TicketStore,
  ticket::{NewTicket, Ticket, TicketId},
};

use crate::{
  Error, Result,
  encode::{RawTicket, encode_dt, encode_validity},
  schema::SCHEMA,
};

const TICKET_COLUMNS: &str = "id, complaint, response, validity, entry_date";

fn map_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawTicket> {
  Ok(RawTicket {
    id:         row.get(0)?,
    complaint:  row.get(1)?,
    response:   row.get(2)?,
    validity:   row.get(3)?,
    entry_date: row.get(4)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Gripe ticket store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All
/// statements for one logical operation run inside a single
/// [`tokio_rusqlite::Connection::call`], so they execute back-to-back on the
/// connection's worker thread and cannot interleave with another task's
/// statements.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a single-column atomic append and read the row back.
  ///
  /// The append is one `UPDATE ... SET col = col || ?` statement — there is
  /// no read-modify-write window, so two concurrent appends to the same row
  /// both land (in either order).
  ///
  /// `column` is interpolated into the SQL and must be a compile-time
  /// constant; only [`append_complaint`](TicketStore::append_complaint) and
  /// [`append_response`](TicketStore::append_response) call this.
  async fn append_column(
    &self,
    column: &'static str,
    id: TicketId,
    fragment: &str,
  ) -> Result<Option<Ticket>> {
    let fragment = fragment.to_owned();

    let raw: Option<RawTicket> = self
      .conn
      .call(move |conn| {
        let updated = conn.execute(
          &format!("UPDATE tickets SET {column} = {column} || ?2 WHERE id = ?1"),
          rusqlite::params![id, fragment],
        )?;

        if updated == 0 {
          return Ok(None);
        }

        Ok(
          conn
            .query_row(
              &format!("SELECT {TICKET_COLUMNS} FROM tickets WHERE id = ?1"),
              rusqlite::params![id],
              map_raw,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTicket::into_ticket).transpose()
  }
}

// ─── TicketStore impl ────────────────────────────────────────────────────────

impl TicketStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewTicket) -> Result<Ticket> {
    let entry_date = Utc::now();

    let complaint    = input.complaint;
    let response     = input.response;
    let validity_int = encode_validity(input.validity);
    let at_str       = encode_dt(entry_date);

    // RETURNING captures the assigned id from the insert itself; selecting
    // the max id afterwards would race against concurrent creators.
    let (id, complaint, response) = self
      .conn
      .call(move |conn| {
        let id: i64 = conn.query_row(
          "INSERT INTO tickets (complaint, response, validity, entry_date)
           VALUES (?1, ?2, ?3, ?4)
           RETURNING id",
          rusqlite::params![complaint, response, validity_int, at_str],
          |row| row.get(0),
        )?;
        Ok((id, complaint, response))
      })
      .await?;

    Ok(Ticket {
      id,
      complaint,
      response,
      validity: input.validity,
      entry_date,
    })
  }

  async fn get(&self, id: TicketId) -> Result<Option<Ticket>> {
    let raw: Option<RawTicket> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {TICKET_COLUMNS} FROM tickets WHERE id = ?1"),
              rusqlite::params![id],
              map_raw,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTicket::into_ticket).transpose()
  }

  async fn list(&self) -> Result<Vec<Ticket>> {
    let raws: Vec<RawTicket> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {TICKET_COLUMNS} FROM tickets ORDER BY id ASC"
        ))?;
        let rows = stmt
          .query_map([], map_raw)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTicket::into_ticket).collect()
  }

  async fn append_complaint(
    &self,
    id: TicketId,
    fragment: &str,
  ) -> Result<Option<Ticket>> {
    self.append_column("complaint", id, fragment).await
  }

  async fn append_response(
    &self,
    id: TicketId,
    fragment: &str,
  ) -> Result<Option<Ticket>> {
    self.append_column("response", id, fragment).await
  }

  async fn append_both(
    &self,
    id: TicketId,
    complaint_fragment: &str,
    response_fragment: &str,
  ) -> Result<Option<Ticket>> {
    let complaint_fragment = complaint_fragment.to_owned();
    let response_fragment  = response_fragment.to_owned();

    let raw: Option<RawTicket> = self
      .conn
      .call(move |conn| {
        // One transaction: either both fragments persist or neither does.
        let tx = conn.transaction()?;

        let updated = tx.execute(
          "UPDATE tickets SET complaint = complaint || ?2 WHERE id = ?1",
          rusqlite::params![id, complaint_fragment],
        )?;
        if updated == 0 {
          tx.rollback()?;
          return Ok(None);
        }

        tx.execute(
          "UPDATE tickets SET response = response || ?2 WHERE id = ?1",
          rusqlite::params![id, response_fragment],
        )?;

        let raw = tx
          .query_row(
            &format!("SELECT {TICKET_COLUMNS} FROM tickets WHERE id = ?1"),
            rusqlite::params![id],
            map_raw,
          )
          .optional()?;

        tx.commit()?;
        Ok(raw)
      })
      .await?;

    raw.map(RawTicket::into_ticket).transpose()
  }
}
