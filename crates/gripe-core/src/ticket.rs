//! Ticket — one logged complaint, the call center's written response, and
//! a validity classification.
//!
//! `complaint` and `response` are append-only after creation: the update
//! operations extend them with a timestamped fragment and never truncate or
//! overwrite prior text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Row identifier assigned by the store at creation. Strictly increasing,
/// never reused, never mutated.
pub type TicketId = i64;

// ─── Validity ────────────────────────────────────────────────────────────────

/// Whether a complaint reflects an actual staff failing.
///
/// Modelled as an explicit three-variant type rather than `Option<bool>` so
/// "unknown at intake" cannot be conflated with a missing value.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
  Yes,
  No,
  #[default]
  Unknown,
}

impl Validity {
  /// The display string used by the listing, export, and view layers.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Yes => "yes",
      Self::No => "no",
      Self::Unknown => "unknown",
    }
  }

  /// Parse a form-submitted value. Accepts the select-box values
  /// (`yes`/`no`/`unknown`) plus the boolean spellings browsers and older
  /// clients send. Anything unrecognised is treated as unknown.
  pub fn parse_form(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "yes" | "true" | "1" | "on" => Self::Yes,
      "no" | "false" | "0" => Self::No,
      _ => Self::Unknown,
    }
  }
}

impl std::fmt::Display for Validity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Ticket ──────────────────────────────────────────────────────────────────

/// A persisted complaint record. `entry_date` is set once by the store at
/// creation and never modified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
  pub id:         TicketId,
  pub complaint:  String,
  pub response:   String,
  pub validity:   Validity,
  pub entry_date: DateTime<Utc>,
}

// ─── NewTicket ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::TicketStore::create`].
/// `id` and `entry_date` are always assigned by the store.
#[derive(Debug, Clone)]
pub struct NewTicket {
  pub complaint: String,
  pub response:  String,
  pub validity:  Validity,
}

impl NewTicket {
  /// Build a creation request, trimming both text fields.
  pub fn new(
    complaint: impl AsRef<str>,
    response: impl AsRef<str>,
    validity: Validity,
  ) -> Self {
    Self {
      complaint: complaint.as_ref().trim().to_owned(),
      response:  response.as_ref().trim().to_owned(),
      validity,
    }
  }
}

// ─── Update fragments ────────────────────────────────────────────────────────

/// Which append-only text field an update targets. Carries the human label
/// used in user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
  Complaint,
  Response,
}

impl std::fmt::Display for UpdateField {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    // "action taken" is the label the intake staff know the response
    // column by; it appears verbatim in the user-facing messages.
    f.write_str(match self {
      Self::Complaint => "complaint",
      Self::Response => "action taken",
    })
  }
}

/// Reject an update fragment that contains no text.
///
/// Called before the store is touched, so a rejected update leaves the
/// ticket row byte-for-byte unchanged.
pub fn validate_fragment(field: UpdateField, text: &str) -> Result<()> {
  if text.trim().is_empty() {
    return Err(Error::EmptyUpdate(field));
  }
  Ok(())
}

/// Format the suffix appended to a field by an update operation.
///
/// The marker line is plain text inside the field itself — updates are not
/// tracked as structured rows, only as inline markers.
pub fn update_fragment(at: DateTime<Utc>, text: &str) -> String {
  format!("\n\nUPDATED {}\n\n{}", at.format("%Y-%m-%d %H:%M:%S"), text)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
