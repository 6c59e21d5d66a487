//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each widget has a plain model here (`service_row`, `quote_card`) and the
//! page-wide `session` owns the rows, counter, and history. Components only
//! read these models and call their methods inside signal updates.

pub mod quote;
pub mod quote_card;
pub mod service_row;
pub mod session;
