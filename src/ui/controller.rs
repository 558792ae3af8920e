//! MVC Controller - Mediates between Model (rate provider) and View (GTK4 widgets)
//!
//! # Responsibilities
//!
//! - Hold the converter state (selections + quantity fields)
//! - Run conversions against the provider's current rate table
//! - Invert the selection pair
//! - Trigger rate reloads
//!
//! # Architecture
//!
//! The Controller holds the rate provider behind its trait and never
//! touches GTK4 widgets. Handlers read widget text into the controller,
//! call one method, and sync the widgets from the returned state, which
//! keeps every behaviour testable without a display.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::convert::{convert, parse_quantity, ConvertError};
use crate::core::types::ConverterState;
use crate::rates::{RateError, RateProvider};

/// MVC Controller coordinating the rate provider and the converter form.
pub struct Controller {
    /// Source of exchange rates (injected so tests run offline).
    provider: Rc<dyn RateProvider>,
    /// Current form state.
    state: RefCell<ConverterState>,
}

impl Controller {
    /// Creates a controller over a provider and an initial selection.
    pub fn new(provider: Rc<dyn RateProvider>, have: &str, want: &str) -> Self {
        Self {
            provider,
            state: RefCell::new(ConverterState::new(have, want)),
        }
    }

    /// Snapshot of the current form state.
    pub fn state(&self) -> ConverterState {
        self.state.borrow().clone()
    }

    /// The status label text for the current selection.
    pub fn status_line(&self) -> String {
        self.state.borrow().status_line()
    }

    /// Records a new "have" currency selection.
    pub fn set_have(&self, code: &str) {
        self.state.borrow_mut().have = code.to_string();
    }

    /// Records a new "want" currency selection.
    pub fn set_want(&self, code: &str) {
        self.state.borrow_mut().want = code.to_string();
    }

    /// Records the text of the "have" quantity entry.
    pub fn set_have_amount(&self, text: &str) {
        self.state.borrow_mut().have_amount = text.to_string();
    }

    /// Swaps selections and quantity fields, returning the new state for
    /// the caller to sync widgets from.
    pub fn invert(&self) -> ConverterState {
        let mut state = self.state.borrow_mut();
        state.invert();
        state.clone()
    }

    /// Converts the current "have" quantity into the "want" currency.
    ///
    /// Parses the quantity field, looks both rates up in the provider's
    /// current table, stores the formatted result in the "want" field,
    /// and returns the converted value.
    pub fn convert_current(&self) -> Result<f64, ConvertError> {
        let table = self.provider.table();
        let mut state = self.state.borrow_mut();

        let quantity = parse_quantity(&state.have_amount)?;
        let converted = convert(&table, quantity, &state.have, &state.want)?;

        state.want_amount = format_amount(converted);
        Ok(converted)
    }

    /// Reloads the rate table, returning the new currency count.
    pub fn reload_rates(&self) -> Result<usize, RateError> {
        self.provider.reload()
    }

    /// Number of currencies in the provider's current table.
    pub fn rate_count(&self) -> usize {
        self.provider.names().len()
    }
}

/// Formats a converted quantity for the entry field.
///
/// Four decimal places, with trailing zeros (and a bare trailing point)
/// removed, so `175.0` renders as "175" and `0.0571` keeps its digits.
pub(crate) fn format_amount(value: f64) -> String {
    let text = format!("{value:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
