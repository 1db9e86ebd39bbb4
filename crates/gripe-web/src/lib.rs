//! HTTP layer for Gripe.
//!
//! Exposes an axum [`Router`] implementing the intake form, the update
//! endpoints, ticket views, the JSON listing, and the CSV export, backed by
//! any [`TicketStore`] and any [`Notify`] implementation.

pub mod error;
pub mod handlers;
pub mod views;

#[cfg(test)]
mod tests;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use gripe_core::store::TicketStore;
use gripe_notify::{MailConfig, Notify};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

fn default_host() -> String { "0.0.0.0".to_owned() }
fn default_port() -> u16 { 8300 }
fn default_export_path() -> PathBuf { PathBuf::from("log.csv") }

/// Runtime server configuration, deserialised once at startup from
/// `config.toml` layered with `GRIPE_*` environment variables, then passed
/// into [`AppState`] — handlers never read ambient global state.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:        String,
  #[serde(default = "default_port")]
  pub port:        u16,
  pub store_path:  PathBuf,
  /// Where `/download` writes its transient CSV file. Overwritten on each
  /// export; not durable state.
  #[serde(default = "default_export_path")]
  pub export_path: PathBuf,
  pub mail:        MailConfig,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: TicketStore, N: Notify> {
  pub store:    Arc<S>,
  pub notifier: Arc<N>,
  pub config:   Arc<ServerConfig>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the ticketing service.
pub fn router<S, N>(state: AppState<S, N>) -> Router
where
  S: TicketStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
  N: Notify + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/",                 get(handlers::submit::form_page))
    .route("/submit",           post(handlers::submit::handler::<S, N>))
    .route("/update_complaint", post(handlers::update::complaint::<S, N>))
    .route("/update_response",  post(handlers::update::response::<S, N>))
    .route("/update_both",      post(handlers::update::both::<S, N>))
    .route("/thank-you",        get(handlers::view::thank_you))
    .route("/view",             get(handlers::view::ticket::<S, N>))
    .route("/viewlog",          get(handlers::listing::page))
    .route("/fetch",            get(handlers::listing::fetch::<S, N>))
    .route("/download",         get(handlers::export::download::<S, N>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
