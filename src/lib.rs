// Copyright 2025 bakri (tidynest@proton.me)
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

//! Cambio
//!
//! A small desktop currency converter: exchange rates are scraped from a
//! web page, cached in memory, and presented in a fixed-size GTK4 form
//! where the user picks two currencies, converts a quantity between them,
//! or inverts the whole selection.
//!
//! # Features
//!
//! - **Live rates:** One blocking fetch at startup; manual reload from the menu
//! - **Typed failures:** Network errors and page-shape errors stay distinct
//! - **Declarative form:** Widgets declared as (row, column, id, kind) tuples
//! - **Checked namespace:** Duplicate widget identifiers fail before a window shows
//! - **Injected rates:** The UI runs against any `RateProvider`, live or fixed
//!
//! # Architecture
//!
//! - **`core`:** Business logic (rate table, converter state, conversion arithmetic)
//! - **`rates`:** Rate Source (HTTP fetch, HTML extraction, reload)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Converting with a fixed table
//!
//! ```
//! use cambio::core::{convert, types::RateTable};
//!
//! let mut table = RateTable::new();
//! table.insert("USD", 1.0);
//! table.insert("MXN", 17.5);
//!
//! let pesos = convert(&table, 10.0, "USD", "MXN")?;
//! assert_eq!(pesos, 175.0);
//! # Ok::<(), cambio::core::ConvertError>(())
//! ```
//!
//! ## Extracting rates from a document
//!
//! ```
//! use cambio::rates::extract_rates;
//!
//! let html = "<table><tbody>\
//!     <tr><td>USD</td><td>US Dollar</td><td><strong>1.0</strong></td></tr>\
//!     </tbody></table>";
//! let table = extract_rates(html)?;
//! assert_eq!(table.names(), &["USD"]);
//! # Ok::<(), cambio::rates::ScrapeError>(())
//! ```
//!
//! ## Running the GUI
//!
//! ```no_run
//! use std::rc::Rc;
//! use cambio::rates::RateSource;
//! use cambio::ui::App;
//!
//! let source = RateSource::new()?; // Blocks for the initial fetch
//! let app = App::new(Rc::new(source));
//! app.run(); // Blocks until window closes
//! # Ok::<(), cambio::rates::RateError>(())
//! ```

pub mod core;
pub mod rates;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::types::{ConverterState, RateTable};
pub use crate::rates::{RateProvider, RateSource};
