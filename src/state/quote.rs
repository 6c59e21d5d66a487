#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One service entry on a quote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl ServiceLine {
    /// `quantity × unit_price`, derived on every call.
    pub fn subtotal(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Sequential per-session quote identifier, displayed zero-padded to 3 digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteNumber(pub u32);

impl fmt::Display for QuoteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Finalized output of one successful submission.
///
/// Built once by [`crate::state::session::QuoteSession::submit`] and never
/// mutated afterwards; the session hands out shared references only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub client_name: String,
    pub sector: String,
    pub currency: String,
    pub notes: Option<String>,
    pub quote_number: QuoteNumber,
    pub line_items: Vec<ServiceLine>,
    pub created_at: OffsetDateTime,
}

impl Quote {
    /// Sum of line subtotals, recomputed from the current items.
    pub fn total(&self) -> f64 {
        sum_subtotals(&self.line_items)
    }
}

/// Compact summary of a past quote kept for the session history list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub client_name: String,
    pub sector: String,
    pub currency: String,
    pub total: f64,
    pub quote_number: QuoteNumber,
}

impl From<&Quote> for HistoryRecord {
    fn from(quote: &Quote) -> Self {
        Self {
            client_name: quote.client_name.clone(),
            sector: quote.sector.clone(),
            currency: quote.currency.clone(),
            total: quote.total(),
            quote_number: quote.quote_number,
        }
    }
}

/// Sum of subtotals starting from positive zero, so an empty list formats as `0.00`.
pub fn sum_subtotals(items: &[ServiceLine]) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + item.subtotal())
}
