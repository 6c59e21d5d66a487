use time::{Month, OffsetDateTime};

use super::*;
use crate::state::quote::QuoteNumber;

fn today() -> Date {
    Date::from_calendar_date(2026, Month::October, 16).unwrap()
}

fn line(description: &str, quantity: f64, unit_price: f64) -> ServiceLine {
    ServiceLine { description: description.to_owned(), quantity, unit_price }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn render_defaults_when_inputs_absent() {
    let view = QuoteCardState::default().render(today(), None);
    assert_eq!(view.client, "\u{2014}");
    assert_eq!(view.sector, "\u{2014}");
    assert_eq!(view.currency, "USD");
    assert_eq!(view.quote_number, "001");
    assert_eq!(view.notes, None);
    assert!(view.rows.is_empty());
    assert_eq!(view.total, "0.00");
}

#[test]
fn render_treats_empty_strings_as_absent() {
    let card = QuoteCardState {
        client: Some(String::new()),
        currency: Some(String::new()),
        notes: Some(String::new()),
        ..QuoteCardState::default()
    };
    let view = card.render(today(), None);
    assert_eq!(view.client, "\u{2014}");
    assert_eq!(view.currency, "USD");
    assert_eq!(view.notes, None);
}

// =============================================================
// Line items / totals
// =============================================================

#[test]
fn render_formats_rows_with_currency_prefix() {
    let mut card = QuoteCardState { currency: Some("GTQ".to_owned()), ..QuoteCardState::default() };
    card.set_line_items(vec![line("Design", 2.0, 1250.0), line("Hosting", 1.5, 10.0)]);

    let view = card.render(today(), None);
    assert_eq!(
        view.rows[0],
        CardRow {
            description: "Design".to_owned(),
            quantity: "2".to_owned(),
            unit_price: "1,250.00".to_owned(),
            subtotal: "GTQ 2,500.00".to_owned(),
        }
    );
    assert_eq!(view.rows[1].quantity, "1.5");
    assert_eq!(view.rows[1].subtotal, "GTQ 15.00");
    assert_eq!(view.total, "2,515.00");
}

#[test]
fn set_line_items_replaces_previous_items() {
    let mut card = QuoteCardState::default();
    card.set_line_items(vec![line("A", 1.0, 1.0)]);
    card.set_line_items(vec![line("B", 2.0, 3.0), line("C", 1.0, 4.0)]);
    assert_eq!(card.line_items().len(), 2);
    assert_eq!(card.total(), 10.0);
}

// =============================================================
// Header / footer
// =============================================================

#[test]
fn render_includes_long_date_and_validity_footer() {
    let view = QuoteCardState::default().render(today(), Some(30));
    assert_eq!(view.date, "16 de octubre de 2026");
    assert_eq!(view.validity.as_deref(), Some("V\u{e1}lido por 30 d\u{ed}as \u{b7} 16 de octubre de 2026"));
}

#[test]
fn render_omits_validity_footer_when_disabled() {
    assert_eq!(QuoteCardState::default().render(today(), None).validity, None);
}

#[test]
fn render_wraps_notes_in_straight_quotes() {
    let card = QuoteCardState { notes: Some("Incluye soporte".to_owned()), ..QuoteCardState::default() };
    assert_eq!(card.render(today(), None).notes.as_deref(), Some("\"Incluye soporte\""));
}

#[test]
fn render_is_idempotent() {
    let mut card = QuoteCardState { notes: Some("Incluye soporte".to_owned()), ..QuoteCardState::default() };
    card.set_line_items(vec![line("Design", 2.0, 50.0)]);
    assert_eq!(card.render(today(), Some(30)), card.render(today(), Some(30)));
}

#[test]
fn from_quote_copies_all_inputs() {
    let quote = Quote {
        client_name: "Acme".to_owned(),
        sector: "Retail".to_owned(),
        currency: "EUR".to_owned(),
        notes: Some("Pago 50% anticipado".to_owned()),
        quote_number: QuoteNumber(12),
        line_items: vec![line("Design", 2.0, 50.0)],
        created_at: OffsetDateTime::UNIX_EPOCH,
    };
    let view = QuoteCardState::from_quote(&quote).render(today(), None);
    assert_eq!(view.client, "Acme");
    assert_eq!(view.sector, "Retail");
    assert_eq!(view.currency, "EUR");
    assert_eq!(view.quote_number, "012");
    assert_eq!(view.notes.as_deref(), Some("\"Pago 50% anticipado\""));
    assert_eq!(view.total, "100.00");
}
