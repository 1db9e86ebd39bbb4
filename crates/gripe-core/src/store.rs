//! The `TicketStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `gripe-store-sqlite`).
//! The web layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::ticket::{NewTicket, Ticket, TicketId};

/// Abstraction over a Gripe ticket store backend.
///
/// `complaint` and `response` are append-only: the only mutations a backend
/// may perform on an existing row are the three `append_*` operations, and
/// each must be atomic with respect to concurrent appends on the same row —
/// two overlapping appends may interleave in either order but neither
/// fragment may be lost.
///
/// Operations that reference a ticket return `Ok(None)` when the id does not
/// exist; `Err` is reserved for backend faults (connectivity, corruption).
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait TicketStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new ticket row. The backend assigns `id` (strictly increasing,
  /// never reused, captured atomically from the insert itself) and
  /// `entry_date`, and returns the persisted ticket.
  fn create(
    &self,
    input: NewTicket,
  ) -> impl Future<Output = Result<Ticket, Self::Error>> + Send + '_;

  /// Retrieve a ticket by id. Returns `None` if not found.
  fn get(
    &self,
    id: TicketId,
  ) -> impl Future<Output = Result<Option<Ticket>, Self::Error>> + Send + '_;

  /// List every ticket, ascending by id.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Ticket>, Self::Error>> + Send + '_;

  /// Append `fragment` to the complaint field. Returns the updated ticket,
  /// or `None` if the id does not exist (in which case nothing is written).
  fn append_complaint<'a>(
    &'a self,
    id: TicketId,
    fragment: &'a str,
  ) -> impl Future<Output = Result<Option<Ticket>, Self::Error>> + Send + 'a;

  /// Append `fragment` to the response field only. The complaint field is
  /// never touched by this operation.
  fn append_response<'a>(
    &'a self,
    id: TicketId,
    fragment: &'a str,
  ) -> impl Future<Output = Result<Option<Ticket>, Self::Error>> + Send + 'a;

  /// Append to both fields in one transaction: either both fragments are
  /// persisted or neither is.
  fn append_both<'a>(
    &'a self,
    id: TicketId,
    complaint_fragment: &'a str,
    response_fragment: &'a str,
  ) -> impl Future<Output = Result<Option<Ticket>, Self::Error>> + Send + 'a;
}
