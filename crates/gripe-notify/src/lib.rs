//! Outbound notification for newly created tickets.
//!
//! One plain-text email per creation, sent to a fixed distribution list.
//! Fire-and-forget: no retry, no queuing, no delivery confirmation is
//! persisted. Callers log failures and move on — a notification failure
//! must never roll back a created ticket.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
#![allow(async_fn_in_trait)]

pub mod error;
mod smtp;

pub use error::{Error, Result};
pub use smtp::{MailConfig, SmtpNotifier};

use std::future::Future;

use gripe_core::ticket::Ticket;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the creation-notification channel.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime.
pub trait Notify: Send + Sync {
  /// Announce a newly created ticket.
  fn ticket_created<'a>(
    &'a self,
    ticket: &'a Ticket,
  ) -> impl Future<Output = Result<()>> + Send + 'a;
}

// ─── NoopNotifier ────────────────────────────────────────────────────────────

/// A notifier that does nothing. Used when mail is disabled in the
/// configuration, and as a test double.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notify for NoopNotifier {
  async fn ticket_created(&self, ticket: &Ticket) -> Result<()> {
    tracing::debug!(id = ticket.id, "mail disabled; skipping notification");
    Ok(())
  }
}

// ─── AnyNotifier ─────────────────────────────────────────────────────────────

/// Runtime-selected notifier: SMTP when mail is enabled, no-op otherwise.
#[derive(Clone)]
pub enum AnyNotifier {
  Smtp(SmtpNotifier),
  Noop(NoopNotifier),
}

impl Notify for AnyNotifier {
  async fn ticket_created(&self, ticket: &Ticket) -> Result<()> {
    match self {
      Self::Smtp(n) => n.ticket_created(ticket).await,
      Self::Noop(n) => n.ticket_created(ticket).await,
    }
  }
}

impl From<SmtpNotifier> for AnyNotifier {
  fn from(n: SmtpNotifier) -> Self { Self::Smtp(n) }
}

impl From<NoopNotifier> for AnyNotifier {
  fn from(n: NoopNotifier) -> Self { Self::Noop(n) }
}
