//! [`SmtpNotifier`] — sends the creation email over a plain SMTP relay.

use std::time::Duration;

use gripe_core::ticket::Ticket;
use lettre::{
  AsyncSmtpTransport, AsyncTransport as _, Message, Tokio1Executor,
  message::{Mailbox, header::ContentType},
};
use serde::Deserialize;

use crate::{Error, Notify, Result};

fn default_timeout_secs() -> u64 { 20 }
fn default_enabled() -> bool { true }

// ─── Configuration ───────────────────────────────────────────────────────────

/// Mail relay settings, deserialised from the `[mail]` table of
/// `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
  pub server:       String,
  pub port:         u16,
  pub from:         String,
  /// Static distribution list; every creation email goes to all of them.
  pub recipients:   Vec<String>,
  /// Connection timeout. The relay call fails after this rather than
  /// hanging the create request.
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
  /// When false the service runs with a no-op notifier.
  #[serde(default = "default_enabled")]
  pub enabled:      bool,
}

// ─── Notifier ────────────────────────────────────────────────────────────────

/// Sends one plain-text message per created ticket to a fixed recipient
/// list. The relay is unauthenticated (an internal mail host), so the
/// transport is built without credentials or TLS negotiation.
#[derive(Clone)]
pub struct SmtpNotifier {
  transport:  AsyncSmtpTransport<Tokio1Executor>,
  from:       Mailbox,
  recipients: Vec<Mailbox>,
}

impl SmtpNotifier {
  /// Build a notifier from config. Fails fast on unparseable addresses or
  /// an empty recipient list so misconfiguration surfaces at startup, not
  /// on the first submission.
  pub fn new(config: &MailConfig) -> Result<Self> {
    if config.recipients.is_empty() {
      return Err(Error::NoRecipients);
    }

    let from = config.from.parse::<Mailbox>()?;
    let recipients = config
      .recipients
      .iter()
      .map(|r| r.parse::<Mailbox>())
      .collect::<Result<Vec<_>, _>>()?;

    let transport =
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.server)
        .port(config.port)
        .timeout(Some(Duration::from_secs(config.timeout_secs)))
        .build();

    Ok(Self { transport, from, recipients })
  }
}

impl Notify for SmtpNotifier {
  async fn ticket_created(&self, ticket: &Ticket) -> Result<()> {
    let mut builder = Message::builder()
      .from(self.from.clone())
      .subject("Complaint Form Submission")
      .header(ContentType::TEXT_PLAIN);
    for to in &self.recipients {
      builder = builder.to(to.clone());
    }

    let message = builder.body(creation_body(ticket))?;
    self.transport.send(message).await?;

    tracing::info!(id = ticket.id, "creation notification sent");
    Ok(())
  }
}

/// The fixed plain-text body of the creation email.
fn creation_body(ticket: &Ticket) -> String {
  format!(
    "Complaint Received: {}\n\n\
     Call Center Response: {}\n\n\
     Complaint ID: {}\n",
    ticket.complaint, ticket.response, ticket.id,
  )
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use gripe_core::ticket::Validity;

  use super::*;

  fn sample_ticket() -> Ticket {
    Ticket {
      id:         7,
      complaint:  "late delivery".into(),
      response:   "apologized and refunded".into(),
      validity:   Validity::Unknown,
      entry_date: Utc::now(),
    }
  }

  #[test]
  fn body_contains_all_three_fields() {
    let body = creation_body(&sample_ticket());
    assert!(body.contains("Complaint Received: late delivery"));
    assert!(body.contains("Call Center Response: apologized and refunded"));
    assert!(body.contains("Complaint ID: 7"));
  }

  #[test]
  fn rejects_empty_recipient_list() {
    let config = MailConfig {
      server:       "mail.example.internal".into(),
      port:         25,
      from:         "tickets@example.internal".into(),
      recipients:   vec![],
      timeout_secs: 20,
      enabled:      true,
    };
    assert!(matches!(SmtpNotifier::new(&config), Err(Error::NoRecipients)));
  }

  #[test]
  fn rejects_malformed_sender() {
    let config = MailConfig {
      server:       "mail.example.internal".into(),
      port:         25,
      from:         "not an address".into(),
      recipients:   vec!["manager@example.internal".into()],
      timeout_secs: 20,
      enabled:      true,
    };
    assert!(matches!(SmtpNotifier::new(&config), Err(Error::Address(_))));
  }
}
