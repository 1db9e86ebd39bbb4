//! SQL schema for the Gripe SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// AUTOINCREMENT keeps ids strictly increasing — a deleted row's id is
/// never handed out again (no operation deletes rows today, but the
/// invariant should survive a future admin tool).
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS tickets (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    complaint  TEXT NOT NULL,
    response   TEXT NOT NULL,
    validity   INTEGER,            -- 1 = yes, 0 = no, NULL = unknown
    entry_date TEXT NOT NULL       -- RFC 3339 UTC; server-assigned
);

PRAGMA user_version = 1;
";
