//! Quote session — form fields, service rows, submission, and history.
//!
//! DESIGN
//! ======
//! One `QuoteSession` lives for the lifetime of the page. It is created by
//! the root component and shared with every view as an
//! `RwSignal<QuoteSession>` context, so all mutation happens inside
//! `session.update(..)` on the UI thread and runs to completion before the
//! next event. Row removal reindexes the remaining rows in the same call.
//!
//! ERROR HANDLING
//! ==============
//! The only failure class is user input validation. `submit` never panics
//! and never produces a partial quote: it either accepts, rejects with the
//! list of offending fields (which are also flagged for inline display), or
//! seeds a fresh row when the form has none.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use time::OffsetDateTime;
use uuid::Uuid;

use super::quote::{HistoryRecord, Quote, QuoteNumber};
use super::service_row::ServiceRowState;
use crate::config::AppConfig;

/// Number of empty rows the form starts with and returns to after a quote.
pub const SEED_ROWS: usize = 2;

// =============================================================================
// TYPES
// =============================================================================

/// Row field that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowField {
    Description,
    UnitPrice,
}

impl std::fmt::Display for RowField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Description => f.write_str("descripci\u{f3}n requerida"),
            Self::UnitPrice => f.write_str("precio unitario inv\u{e1}lido"),
        }
    }
}

/// A reason a submission was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Ingresa el nombre del cliente.")]
    MissingClientName,
    #[error("Selecciona un sector.")]
    MissingSector,
    #[error("Servicio {position}: {field}.")]
    InvalidRow { position: usize, field: RowField },
    #[error("Agrega al menos un servicio.")]
    NoLineItems,
}

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// A quote was issued and the form reset.
    Accepted(Quote),
    /// Nothing changed except the error markers.
    Rejected(Vec<ValidationError>),
    /// The form had no rows; one empty row was added instead.
    RowSeeded,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Top-level form inputs and their inline error markers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub client_name: String,
    pub sector: String,
    pub currency: String,
    pub notes: String,
    pub client_error: bool,
    pub sector_error: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuoteSession {
    form: FormFields,
    rows: Vec<ServiceRowState>,
    quote_counter: u32,
    history: Vec<HistoryRecord>,
    current_quote: Option<Quote>,
    default_currency: String,
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl QuoteSession {
    /// Fresh session with two empty rows and no quotes.
    pub fn new(config: &AppConfig) -> Self {
        let mut session = Self {
            form: FormFields { currency: config.default_currency.clone(), ..FormFields::default() },
            rows: Vec::new(),
            quote_counter: 0,
            history: Vec::new(),
            current_quote: None,
            default_currency: config.default_currency.clone(),
        };
        session.seed_rows();
        session
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn rows(&self) -> &[ServiceRowState] {
        &self.rows
    }

    pub fn row(&self, id: Uuid) -> Option<&ServiceRowState> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn row_ids(&self) -> Vec<Uuid> {
        self.rows.iter().map(ServiceRowState::id).collect()
    }

    pub fn quote_counter(&self) -> u32 {
        self.quote_counter
    }

    /// All issued quotes, newest first.
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Quotes issued before the one currently displayed.
    pub fn previous_quotes(&self) -> &[HistoryRecord] {
        self.history.get(1..).unwrap_or_default()
    }

    pub fn current_quote(&self) -> Option<&Quote> {
        self.current_quote.as_ref()
    }

    // =========================================================================
    // FIELD EDITS
    // =========================================================================

    pub fn set_client_name(&mut self, value: impl Into<String>) {
        self.form.client_name = value.into();
        self.form.client_error = false;
    }

    pub fn set_sector(&mut self, value: impl Into<String>) {
        self.form.sector = value.into();
        self.form.sector_error = false;
    }

    pub fn set_currency(&mut self, value: impl Into<String>) {
        self.form.currency = value.into();
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        self.form.notes = value.into();
    }

    /// Apply `edit` to the row with `id`; unknown ids are ignored.
    pub fn update_row(&mut self, id: Uuid, edit: impl FnOnce(&mut ServiceRowState)) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id() == id) {
            edit(row);
        }
    }

    // =========================================================================
    // ROWS
    // =========================================================================

    /// Append an empty row after the last one.
    pub fn add_service_row(&mut self) -> Uuid {
        let row = ServiceRowState::new(self.rows.len() + 1);
        let id = row.id();
        log::trace!("added {}", row.label());
        self.rows.push(row);
        id
    }

    /// Detach the row with `id` and renumber the rest.
    pub fn remove_row(&mut self, id: Uuid) {
        let before = self.rows.len();
        self.rows.retain(|r| r.id() != id);
        if self.rows.len() != before {
            log::trace!("removed service row {id}");
            self.reindex_rows();
        }
    }

    /// Renumber rows 1..N in display order.
    pub fn reindex_rows(&mut self) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_position(i + 1);
        }
    }

    fn seed_rows(&mut self) {
        self.rows.clear();
        for _ in 0..SEED_ROWS {
            self.add_service_row();
        }
    }

    // =========================================================================
    // SUBMIT
    // =========================================================================

    /// Validate the form and, when everything passes, issue a quote stamped `now`.
    pub fn submit(&mut self, now: OffsetDateTime) -> SubmitOutcome {
        let mut errors = Vec::new();

        self.form.client_error = self.form.client_name.trim().is_empty();
        if self.form.client_error {
            errors.push(ValidationError::MissingClientName);
        }
        self.form.sector_error = self.form.sector.is_empty();
        if self.form.sector_error {
            errors.push(ValidationError::MissingSector);
        }

        if self.rows.is_empty() {
            self.add_service_row();
            log::debug!("submit with no service rows; seeded an empty row");
            return SubmitOutcome::RowSeeded;
        }

        let mut line_items = Vec::new();
        for row in &mut self.rows {
            if row.validate() {
                let line = row.data();
                if !line.description.is_empty() {
                    line_items.push(line);
                }
                continue;
            }
            if row.description_error() {
                errors.push(ValidationError::InvalidRow { position: row.position(), field: RowField::Description });
            }
            if row.price_error() {
                errors.push(ValidationError::InvalidRow { position: row.position(), field: RowField::UnitPrice });
            }
        }
        if errors.is_empty() && line_items.is_empty() {
            errors.push(ValidationError::NoLineItems);
        }

        if !errors.is_empty() {
            log::debug!("quote rejected: {errors:?}");
            return SubmitOutcome::Rejected(errors);
        }

        self.quote_counter += 1;
        let notes = self.form.notes.trim();
        let quote = Quote {
            client_name: self.form.client_name.trim().to_owned(),
            sector: self.form.sector.clone(),
            currency: self.form.currency.clone(),
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
            quote_number: QuoteNumber(self.quote_counter),
            line_items,
            created_at: now,
        };
        log::info!(
            "quote {} issued: {} lines, total {:.2} {}",
            quote.quote_number,
            quote.line_items.len(),
            quote.total(),
            quote.currency
        );

        self.history.insert(0, HistoryRecord::from(&quote));
        self.current_quote = Some(quote.clone());
        self.reset_form();
        SubmitOutcome::Accepted(quote)
    }

    fn reset_form(&mut self) {
        self.form = FormFields { currency: self.default_currency.clone(), ..FormFields::default() };
        self.seed_rows();
    }
}
