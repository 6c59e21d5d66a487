//! Editable service line item.
//!
//! DESIGN
//! ======
//! Field values are kept as the raw strings the inputs hold so the view can
//! bind them directly. Parsing happens on demand: quantity silently falls back
//! to 1, while a missing or invalid unit price is a validation failure.

#[cfg(test)]
#[path = "service_row_test.rs"]
mod service_row_test;

use uuid::Uuid;

use super::quote::ServiceLine;

pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Model behind one `ServiceRow` view.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceRowState {
    id: Uuid,
    position: usize,
    description: String,
    quantity: String,
    unit_price: String,
    description_error: bool,
    price_error: bool,
}

impl ServiceRowState {
    /// Empty row displayed as `Servicio {position}`.
    pub fn new(position: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            description: String::new(),
            quantity: "1".to_owned(),
            unit_price: String::new(),
            description_error: false,
            price_error: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn label(&self) -> String {
        format!("Servicio {}", self.position)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn unit_price(&self) -> &str {
        &self.unit_price
    }

    pub fn description_error(&self) -> bool {
        self.description_error
    }

    pub fn price_error(&self) -> bool {
        self.price_error
    }

    /// Update the displayed position without touching field contents.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Typing into the description clears its error marker.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
        self.description_error = false;
    }

    pub fn set_quantity(&mut self, value: impl Into<String>) {
        self.quantity = value.into();
    }

    /// Typing into the unit price clears its error marker.
    pub fn set_unit_price(&mut self, value: impl Into<String>) {
        self.unit_price = value.into();
        self.price_error = false;
    }

    /// Current values as a line item.
    pub fn data(&self) -> ServiceLine {
        let quantity = parse_number(&self.quantity)
            .filter(|q| *q != 0.0)
            .unwrap_or(DEFAULT_QUANTITY);
        let unit_price = parse_number(&self.unit_price).unwrap_or(0.0);
        ServiceLine { description: self.description.trim().to_owned(), quantity, unit_price }
    }

    /// Check description and unit price, setting or clearing each error marker.
    pub fn validate(&mut self) -> bool {
        self.description_error = self.description.trim().is_empty();
        self.price_error = !parse_number(&self.unit_price).is_some_and(|price| price >= 0.0);
        !self.description_error && !self.price_error
    }
}

/// Parse a numeric input value; blank, malformed, and non-finite values are `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
