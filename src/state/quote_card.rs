//! Render model for the printable quote card.
//!
//! `QuoteCardState` holds the card's inputs exactly as they were handed over
//! (any of them may be absent) and `render` resolves defaults and formats
//! every display string. Rendering is a pure function of the inputs plus the
//! date it is given.

#[cfg(test)]
#[path = "quote_card_test.rs"]
mod quote_card_test;

use time::Date;

use super::quote::{Quote, ServiceLine, sum_subtotals};
use crate::util::format::{format_amount, format_long_date, format_quantity};

pub const PLACEHOLDER: &str = "\u{2014}";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_QUOTE_NUMBER: &str = "001";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteCardState {
    pub client: Option<String>,
    pub sector: Option<String>,
    pub currency: Option<String>,
    pub notes: Option<String>,
    pub quote_number: Option<String>,
    line_items: Vec<ServiceLine>,
}

/// Fully formatted card contents.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteCardView {
    pub quote_number: String,
    pub client: String,
    pub sector: String,
    pub date: String,
    pub currency: String,
    pub rows: Vec<CardRow>,
    pub total: String,
    /// Notes wrapped in double quotes, absent when empty.
    pub notes: Option<String>,
    pub validity: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardRow {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub subtotal: String,
}

impl QuoteCardState {
    pub fn from_quote(quote: &Quote) -> Self {
        let mut card = Self {
            client: Some(quote.client_name.clone()),
            sector: Some(quote.sector.clone()),
            currency: Some(quote.currency.clone()),
            notes: quote.notes.clone(),
            quote_number: Some(quote.quote_number.to_string()),
            line_items: Vec::new(),
        };
        card.set_line_items(quote.line_items.clone());
        card
    }

    pub fn set_line_items(&mut self, items: Vec<ServiceLine>) {
        self.line_items = items;
    }

    pub fn line_items(&self) -> &[ServiceLine] {
        &self.line_items
    }

    pub fn total(&self) -> f64 {
        sum_subtotals(&self.line_items)
    }

    /// Resolve defaults and format the card for `today`.
    ///
    /// `validity_days` adds the `Válido por N días` disclaimer to the footer.
    pub fn render(&self, today: Date, validity_days: Option<u32>) -> QuoteCardView {
        let currency = or_default(self.currency.as_deref(), DEFAULT_CURRENCY);
        let date = format_long_date(today);

        let rows = self
            .line_items
            .iter()
            .map(|item| CardRow {
                description: item.description.clone(),
                quantity: format_quantity(item.quantity),
                unit_price: format_amount(item.unit_price),
                subtotal: format!("{currency} {}", format_amount(item.subtotal())),
            })
            .collect();

        QuoteCardView {
            quote_number: or_default(self.quote_number.as_deref(), DEFAULT_QUOTE_NUMBER),
            client: or_default(self.client.as_deref(), PLACEHOLDER),
            sector: or_default(self.sector.as_deref(), PLACEHOLDER),
            rows,
            total: format_amount(self.total()),
            notes: self.notes.as_deref().filter(|n| !n.is_empty()).map(|n| format!("\"{n}\"")),
            validity: validity_days.map(|days| format!("V\u{e1}lido por {days} d\u{ed}as \u{b7} {date}")),
            currency,
            date,
        }
    }
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback).to_owned()
}
