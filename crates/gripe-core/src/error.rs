//! Error types for `gripe-core`.

use thiserror::Error;

use crate::ticket::UpdateField;

#[derive(Debug, Error)]
pub enum Error {
  /// An update fragment trimmed to nothing. User input error, not a fault;
  /// raised before any store call so the ticket is untouched.
  #[error("no information entered to update {0}")]
  EmptyUpdate(UpdateField),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
