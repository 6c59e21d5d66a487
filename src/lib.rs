//! # cotizen
//!
//! Leptos + WASM quote generator. Users enter client details and a list of
//! service line items; the page renders a printable quote card and keeps a
//! history of the quotes issued during the session. Nothing is persisted.
//!
//! `state` holds the plain models (service rows, quote card, session) and all
//! validation/totals logic; `components` are thin Leptos views over them.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;
