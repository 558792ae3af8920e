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

//! src/rates/mod.rs
//!
//! Rate Source: fetching and caching of exchange rates
//!
//! [`RateSource`] performs one blocking HTTP GET on construction, extracts
//! the rate table from the returned document, and keeps the result in
//! memory. `reload()` re-runs the whole fetch and swaps the table in
//! wholesale - readers observe either the old snapshot or the new one,
//! never a mix.
//!
//! The [`RateProvider`] trait is the seam the UI consumes. [`FixedRates`]
//! implements it over a caller-supplied table so the converter runs in
//! tests (and offline) without touching the network.

use std::cell::RefCell;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::core::types::RateTable;

pub mod scrape;
#[cfg(test)]
mod tests;

pub use scrape::{extract_rates, ScrapeError};

/// The page the rates are scraped from.
pub const EXCHANGE_RATES_URL: &str = "https://www.iban.com/exchange-rates";

const USER_AGENT: &str = concat!("cambio/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur while loading the rate table.
///
/// The two variants are deliberately distinct: `Fetch` means the network
/// call failed ("no connection"), `Scrape` means the document arrived but
/// its shape did not match ("source page changed"). Neither is retried;
/// a failed load leaves the previous table untouched.
#[derive(Debug, Error)]
pub enum RateError {
    /// Network call did not succeed.
    #[error("rate request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    /// Document fetched but extraction failed.
    #[error("rate extraction failed: {0}")]
    Scrape(#[from] ScrapeError),
}

/// Source of exchange rates for the converter.
///
/// The UI and CLI only ever talk to this trait, so tests can supply a
/// fixed table without network access.
pub trait RateProvider {
    /// Currency codes of the current table, in document order.
    fn names(&self) -> Vec<String>;

    /// Rate for one code, if present.
    fn rate(&self, code: &str) -> Option<f64>;

    /// Snapshot of the whole current table.
    fn table(&self) -> RateTable;

    /// Re-runs the load and atomically replaces the table.
    ///
    /// Returns the number of currencies in the new table.
    fn reload(&self) -> Result<usize, RateError>;
}

/// Live rate source backed by the exchange-rate page.
///
/// Construction performs the initial load and fails if the fetch or the
/// extraction fails. The whole application is single-threaded, so the
/// table sits behind a `RefCell` and `reload()` swaps it in one step.
#[derive(Debug)]
pub struct RateSource {
    url: String,
    client: Client,
    table: RefCell<RateTable>,
}

impl RateSource {
    /// Creates a source over the default exchange-rate page.
    ///
    /// Blocks for the duration of the initial fetch.
    pub fn new() -> Result<Self, RateError> {
        Self::with_url(EXCHANGE_RATES_URL)
    }

    /// Creates a source over an explicit URL.
    ///
    /// # Example
    /// ```no_run
    /// use cambio::rates::{RateProvider, RateSource};
    ///
    /// let source = RateSource::with_url("https://www.iban.com/exchange-rates")?;
    /// println!("loaded {} currencies", source.names().len());
    /// # Ok::<(), cambio::rates::RateError>(())
    /// ```
    pub fn with_url(url: &str) -> Result<Self, RateError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let table = fetch_table(&client, url)?;

        Ok(Self {
            url: url.to_string(),
            client,
            table: RefCell::new(table),
        })
    }
}

impl RateProvider for RateSource {
    fn names(&self) -> Vec<String> {
        self.table.borrow().names().to_vec()
    }

    fn rate(&self, code: &str) -> Option<f64> {
        self.table.borrow().rate(code)
    }

    fn table(&self) -> RateTable {
        self.table.borrow().clone()
    }

    fn reload(&self) -> Result<usize, RateError> {
        // Build the replacement in full before touching the visible table.
        let fresh = fetch_table(&self.client, &self.url)?;
        let count = fresh.len();

        self.table.replace(fresh);
        Ok(count)
    }
}

/// In-memory provider over a caller-supplied table.
///
/// `reload()` is a no-op that reports the current count. Used by the UI
/// tests and by anything that should run without network access.
pub struct FixedRates {
    table: RateTable,
}

impl FixedRates {
    /// Wraps an already-built table.
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }
}

impl RateProvider for FixedRates {
    fn names(&self) -> Vec<String> {
        self.table.names().to_vec()
    }

    fn rate(&self, code: &str) -> Option<f64> {
        self.table.rate(code)
    }

    fn table(&self) -> RateTable {
        self.table.clone()
    }

    fn reload(&self) -> Result<usize, RateError> {
        Ok(self.table.len())
    }
}

/// One load attempt: GET the page, then extract the table.
///
/// HTTP error statuses count as fetch failures; everything after a
/// successful transfer is an extraction failure.
fn fetch_table(client: &Client, url: &str) -> Result<RateTable, RateError> {
    let response = client.get(url).send()?.error_for_status()?;
    let document = response.text()?;

    Ok(extract_rates(&document)?)
}
