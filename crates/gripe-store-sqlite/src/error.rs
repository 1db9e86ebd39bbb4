//! Error type for `gripe-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// The validity column held something other than 0, 1, or NULL.
  #[error("invalid validity column value: {0}")]
  InvalidValidity(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
