//! Error type for `gripe-notify`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid mail address: {0}")]
  Address(#[from] lettre::address::AddressError),

  #[error("message build error: {0}")]
  Compose(#[from] lettre::error::Error),

  #[error("smtp transport error: {0}")]
  Transport(#[from] lettre::transport::smtp::Error),

  #[error("no recipients configured")]
  NoRecipients,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
