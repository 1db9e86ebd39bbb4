//! Router-level tests against an in-memory store and a no-op notifier.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use gripe_core::store::TicketStore;
use gripe_notify::{MailConfig, NoopNotifier};
use gripe_store_sqlite::SqliteStore;
use tower::ServiceExt as _;

use crate::{AppState, ServerConfig, router};

fn test_config() -> ServerConfig {
  ServerConfig {
    host:        "127.0.0.1".into(),
    port:        0,
    store_path:  ":memory:".into(),
    export_path: std::env::temp_dir().join("gripe-test-log.csv"),
    mail:        MailConfig {
      server:       "mail.example.internal".into(),
      port:         25,
      from:         "tickets@example.internal".into(),
      recipients:   vec!["manager@example.internal".into()],
      timeout_secs: 20,
      enabled:      false,
    },
  }
}

async fn app() -> (Router, Arc<SqliteStore>) {
  let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
  let state = AppState {
    store:    store.clone(),
    notifier: Arc::new(NoopNotifier),
    config:   Arc::new(test_config()),
  };
  (router(state), store)
}

fn form_post(path: &str, body: &str) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(path)
    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
    .body(Body::from(body.to_owned()))
    .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
  let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
    .await
    .unwrap();
  String::from_utf8(bytes.to_vec()).unwrap()
}

// ─── Submission ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn submit_creates_and_redirects() {
  let (app, store) = app().await;

  let response = app
    .oneshot(form_post(
      "/submit",
      "complaint=late+delivery&response=apologized+and+refunded&validity=unknown",
    ))
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::SEE_OTHER);
  let location = response.headers()[header::LOCATION].to_str().unwrap();
  assert_eq!(location, "/thank-you?id=1");

  let ticket = store.get(1).await.unwrap().expect("ticket persisted");
  assert_eq!(ticket.complaint, "late delivery");
  assert_eq!(ticket.response, "apologized and refunded");
  assert_eq!(ticket.validity, gripe_core::ticket::Validity::Unknown);
}

#[tokio::test]
async fn view_shows_unknown_validity() {
  let (app, _store) = app().await;

  app
    .clone()
    .oneshot(form_post("/submit", "complaint=c&response=r&validity=unknown"))
    .await
    .unwrap();

  let response = app
    .oneshot(Request::get("/view?id=1").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let html = body_string(response).await;
  assert!(html.contains("<b>Validity:</b> unknown"));
}

// ─── Updates ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_update_rejected_before_store() {
  let (app, store) = app().await;

  app
    .clone()
    .oneshot(form_post("/submit", "complaint=c&response=r&validity=yes"))
    .await
    .unwrap();
  let before = store.get(1).await.unwrap().unwrap();

  let response = app
    .oneshot(form_post("/update_complaint", "update_complaint=&id=1"))
    .await
    .unwrap();

  // User input error: a message page at HTTP success status.
  assert_eq!(response.status(), StatusCode::OK);
  let html = body_string(response).await;
  assert!(html.contains("No information entered to update complaint."));

  let after = store.get(1).await.unwrap().unwrap();
  assert_eq!(after.complaint, before.complaint);
  assert_eq!(after.response, before.response);
}

#[tokio::test]
async fn update_missing_ticket_renders_not_found() {
  let (app, store) = app().await;

  let response = app
    .oneshot(form_post(
      "/update_complaint",
      "update_complaint=more+detail&id=999",
    ))
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let html = body_string(response).await;
  assert!(html.contains("Complaint not found."));
  assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_response_touches_response_only() {
  let (app, store) = app().await;

  app
    .clone()
    .oneshot(form_post("/submit", "complaint=c&response=r&validity=no"))
    .await
    .unwrap();

  let response = app
    .oneshot(form_post(
      "/update_response",
      "update_response=refund+confirmed&id=1",
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let ticket = store.get(1).await.unwrap().unwrap();
  assert_eq!(ticket.complaint, "c");
  assert!(ticket.response.starts_with('r'));
  assert!(ticket.response.ends_with("refund confirmed"));
}

#[tokio::test]
async fn update_both_takes_json_body() {
  let (app, store) = app().await;

  app
    .clone()
    .oneshot(form_post("/submit", "complaint=c&response=r&validity=yes"))
    .await
    .unwrap();

  let response = app
    .oneshot(
      Request::post("/update_both")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
          r#"{"ticket_id":1,"complaint":"still waiting","response":"escalated"}"#,
        ))
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let ticket = store.get(1).await.unwrap().unwrap();
  assert!(ticket.complaint.ends_with("still waiting"));
  assert!(ticket.response.ends_with("escalated"));
}

// ─── Listing and export ──────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_lists_ascending_with_stringified_fields() {
  let (app, _store) = app().await;

  for c in ["a", "b", "c"] {
    app
      .clone()
      .oneshot(form_post(
        "/submit",
        &format!("complaint={c}&response=r&validity=yes"),
      ))
      .await
      .unwrap();
  }

  let response = app
    .oneshot(Request::get("/fetch").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let rows: Vec<serde_json::Value> =
    serde_json::from_str(&body_string(response).await).unwrap();
  assert_eq!(rows.len(), 3);
  let ids: Vec<i64> =
    rows.iter().map(|r| r["id"].as_i64().unwrap()).collect();
  assert_eq!(ids, vec![1, 2, 3]);
  assert_eq!(rows[0]["validity"], "yes");
  assert!(rows[0]["entry_date"].is_string());
}

#[tokio::test]
async fn download_header_matches_listing_order() {
  let (app, _store) = app().await;

  app
    .clone()
    .oneshot(form_post("/submit", "complaint=c&response=r&validity=no"))
    .await
    .unwrap();

  let response = app
    .oneshot(Request::get("/download").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(
    response.headers()[header::CONTENT_TYPE],
    "text/csv; charset=utf-8"
  );

  let csv_text = body_string(response).await;
  let mut lines = csv_text.lines();
  assert_eq!(
    lines.next().unwrap(),
    "id,validity,entry_date,complaint,response"
  );
  let data = lines.next().unwrap();
  assert_eq!(data.split(',').count(), 5);
}

#[tokio::test]
async fn download_empty_set_still_has_header() {
  let (app, _store) = app().await;

  let response = app
    .oneshot(Request::get("/download").body(Body::empty()).unwrap())
    .await
    .unwrap();
  let csv_text = body_string(response).await;
  assert_eq!(
    csv_text.trim_end(),
    "id,validity,entry_date,complaint,response"
  );
}
