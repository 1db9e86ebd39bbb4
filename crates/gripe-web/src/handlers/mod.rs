//! Request handlers, one module per concern.

pub mod export;
pub mod listing;
pub mod submit;
pub mod update;
pub mod view;
