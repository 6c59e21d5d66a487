//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and locale formatting
//! from state and component logic to improve reuse and testability.

pub mod clock;
pub mod format;
pub mod viewport;
