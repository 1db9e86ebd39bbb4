//! Encoding and decoding helpers between Rust domain types and the plain
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. Validity is a nullable
//! integer: 1 (yes), 0 (no), NULL (unknown).

use chrono::{DateTime, Utc};
use gripe_core::ticket::{Ticket, Validity};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Validity ────────────────────────────────────────────────────────────────

pub fn encode_validity(v: Validity) -> Option<i64> {
  match v {
    Validity::Yes => Some(1),
    Validity::No => Some(0),
    Validity::Unknown => None,
  }
}

pub fn decode_validity(v: Option<i64>) -> Result<Validity> {
  match v {
    Some(1) => Ok(Validity::Yes),
    Some(0) => Ok(Validity::No),
    None => Ok(Validity::Unknown),
    Some(other) => Err(Error::InvalidValidity(other)),
  }
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `tickets` row.
pub struct RawTicket {
  pub id:         i64,
  pub complaint:  String,
  pub response:   String,
  pub validity:   Option<i64>,
  pub entry_date: String,
}

impl RawTicket {
  pub fn into_ticket(self) -> Result<Ticket> {
    Ok(Ticket {
      id:         self.id,
      complaint:  self.complaint,
      response:   self.response,
      validity:   decode_validity(self.validity)?,
      entry_date: decode_dt(&self.entry_date)?,
    })
  }
}
