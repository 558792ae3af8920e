// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/types.rs
//!
//! Core type definitions for currency conversion
//!
//! This module defines the fundamental types used throughout the application:
//! - `RateTable`: ordered mapping from currency code to exchange rate
//! - `ConverterState`: the two picker selections plus their quantity fields
//!
//! All types implement serialization and are designed so that business
//! logic stays testable without a display server or network access.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A snapshot of exchange rates at one point in time.
///
/// Maps a currency code (e.g. "USD") to its rate, expressed as units of that
/// currency per one unit of the source page's base currency. Codes are
/// unique and iterate in the order they appeared in the source document.
///
/// A table is always built in full and swapped in wholesale - callers never
/// observe a partially populated snapshot.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RateTable {
    /// Currency codes in document row order.
    codes: Vec<String>,
    /// Code -> rate lookup.
    rates: HashMap<String, f64>,
    /// When this snapshot was fetched.
    fetched_at: DateTime<Local>,
}

impl RateTable {
    /// Creates an empty table stamped with the current local time.
    pub fn new() -> Self {
        Self {
            codes: Vec::new(),
            rates: HashMap::new(),
            fetched_at: Local::now(),
        }
    }

    /// Inserts a currency, preserving insertion order.
    ///
    /// Returns `false` and leaves the table untouched when the code is
    /// already present. Uniqueness of codes is an invariant of the table,
    /// so callers must treat a `false` return as a malformed source.
    pub fn insert(&mut self, code: &str, rate: f64) -> bool {
        if self.rates.contains_key(code) {
            return false;
        }

        self.codes.push(code.to_string());
        self.rates.insert(code.to_string(), rate);
        true
    }

    /// Currency codes in document row order.
    pub fn names(&self) -> &[String] {
        &self.codes
    }

    /// The full code -> rate mapping.
    pub fn rates(&self) -> &HashMap<String, f64> {
        &self.rates
    }

    /// Looks up the rate for one code.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Number of currencies in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when the table holds no currencies.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// When this snapshot was fetched.
    pub fn fetched_at(&self) -> DateTime<Local> {
        self.fetched_at
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rates @ {}",
            self.len(),
            self.fetched_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// The converter form's state: two currency selections and their paired
/// quantity fields.
///
/// Every callback in the UI operates on this struct rather than closing
/// over widget handles, so inversion and the status line are plain
/// functions that test without a display.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConverterState {
    /// Currency the user has.
    pub have: String,
    /// Currency the user wants.
    pub want: String,
    /// Quantity field paired with `have`.
    pub have_amount: String,
    /// Quantity field paired with `want`.
    pub want_amount: String,
}

impl ConverterState {
    /// Creates a state with empty quantity fields.
    pub fn new(have: &str, want: &str) -> Self {
        Self {
            have: have.to_string(),
            want: want.to_string(),
            have_amount: String::new(),
            want_amount: String::new(),
        }
    }

    /// Swaps both the currency selections and the paired quantity fields.
    ///
    /// Applying this twice restores the original state.
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.have, &mut self.want);
        std::mem::swap(&mut self.have_amount, &mut self.want_amount);
    }

    /// The status label text for the current selection.
    pub fn status_line(&self) -> String {
        format!("Convert from {} to {}:", self.have, self.want)
    }
}

impl fmt::Display for ConverterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.have, self.want)
    }
}
