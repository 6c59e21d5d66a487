//! Leptos view components.

pub mod history_panel;
pub mod quote_card;
pub mod quote_form;
pub mod service_row;
