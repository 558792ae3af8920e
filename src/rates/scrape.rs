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

//! src/rates/scrape.rs
//!
//! Rate table extraction from the exchange-rate page
//!
//! The source page carries one `<tbody>` whose rows each hold the currency
//! code in their first cell and the rate inside a `<strong>` element in
//! their third cell. This module walks every row of that body and builds a
//! [`RateTable`] in document order.
//!
//! # Architecture
//! The extraction uses nom combinators to slice the relevant elements out
//! of the document. Each failure mode maps to a distinct [`ScrapeError`]
//! variant with the offending row number, so a shape change upstream
//! surfaces as a typed error instead of an index panic.

use nom::bytes::complete::{tag, take_until};
use nom::IResult;
use regex::Regex;
use thiserror::Error;

use crate::core::types::RateTable;

/// Extraction errors with row context.
///
/// Distinct from the network error so callers can tell "source page
/// changed" apart from "no connection".
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Document has no `<tbody>` element.
    #[error("rate table not found in document")]
    TableMissing,
    /// A row lacks the expected cell.
    #[error("row {row}: missing {cell} cell")]
    MissingCell { row: usize, cell: &'static str },
    /// The rate cell did not hold a number.
    #[error("row {row}: cannot parse rate '{value}'")]
    BadRate { row: usize, value: String },
    /// The same currency code appeared twice.
    #[error("row {row}: duplicate currency code '{code}'")]
    DuplicateCode { row: usize, code: String },
    /// The table body holds no rows.
    #[error("rate table has no rows")]
    Empty,
}

/// Extracts the full rate table from an HTML document.
///
/// Every row of the table body must yield a currency code and a rate;
/// the first malformed row aborts the extraction. The returned table is
/// complete or the extraction failed - there is no partial result.
///
/// # Example
/// ```ignore
/// let document = reqwest::blocking::get(url)?.text()?;
/// let table = extract_rates(&document)?;
/// println!("loaded {} rates", table.len());
/// ```
pub fn extract_rates(document: &str) -> Result<RateTable, ScrapeError> {
    let body = table_body(document).ok_or(ScrapeError::TableMissing)?;

    let mut table = RateTable::new();

    for (index, row) in rows(body).enumerate() {
        let row_num = index + 1; // Human-readable numbers start at 1
        let (code, rate) = extract_row(row, row_num)?;

        if !table.insert(&code, rate) {
            return Err(ScrapeError::DuplicateCode {
                row: row_num,
                code,
            });
        }
    }

    if table.is_empty() {
        return Err(ScrapeError::Empty);
    }

    Ok(table)
}

/// Extracts (code, rate) from one table row.
///
/// Cell addressing matches the source page: first cell is the currency
/// code, third cell wraps the rate value in a `<strong>` element.
fn extract_row(row: &str, row_num: usize) -> Result<(String, f64), ScrapeError> {
    let cells = row_cells(row);

    let code_cell = cells.first().ok_or(ScrapeError::MissingCell {
        row: row_num,
        cell: "currency",
    })?;

    let code = cell_text(code_cell);
    if code.is_empty() {
        return Err(ScrapeError::MissingCell {
            row: row_num,
            cell: "currency",
        });
    }

    let rate_cell = cells.get(2).ok_or(ScrapeError::MissingCell {
        row: row_num,
        cell: "rate",
    })?;

    let value = strong_inner(rate_cell)
        .map(|(_, inner)| inner)
        .map_err(|_| ScrapeError::MissingCell {
            row: row_num,
            cell: "rate",
        })?;

    let rate = value
        .trim()
        .parse::<f64>()
        .map_err(|_| ScrapeError::BadRate {
            row: row_num,
            value: value.trim().to_string(),
        })?;

    Ok((code, rate))
}

/// Slices the inner HTML of the first `<tbody>` element.
fn table_body(document: &str) -> Option<&str> {
    tbody_inner(document).ok().map(|(_, inner)| inner)
}

fn tbody_inner(input: &str) -> IResult<&str, &str> {
    let (input, _) = take_until("<tbody")(input)?;
    let (input, _) = take_until(">")(input)?;
    let (input, _) = tag(">")(input)?;
    take_until("</tbody>")(input)
}

/// Iterates over the inner HTML of each `<tr>` in a table body.
fn rows(body: &str) -> impl Iterator<Item = &str> {
    body.split("<tr").skip(1).filter_map(|chunk| {
        // Drop the rest of the opening tag, keep up to the closing tag.
        let (_, rest) = chunk.split_once('>')?;
        match rest.split_once("</tr>") {
            Some((inner, _)) => Some(inner),
            None => Some(rest),
        }
    })
}

/// Collects the inner HTML of every `<td>` cell in one row.
fn row_cells(row: &str) -> Vec<&str> {
    let mut cells = Vec::new();
    let mut rest = row;

    while let Ok((remaining, inner)) = td_inner(rest) {
        cells.push(inner);
        rest = remaining;
    }

    cells
}

fn td_inner(input: &str) -> IResult<&str, &str> {
    let (input, _) = take_until("<td")(input)?;
    let (input, _) = take_until(">")(input)?;
    let (input, _) = tag(">")(input)?;
    take_until("</td>")(input)
}

/// Parses the inner text of the `<strong>` element inside a rate cell.
fn strong_inner(input: &str) -> IResult<&str, &str> {
    let (input, _) = take_until("<strong")(input)?;
    let (input, _) = take_until(">")(input)?;
    let (input, _) = tag(">")(input)?;
    take_until("</strong>")(input)
}

/// Flattens a cell to its text content.
///
/// Strips any nested markup and all whitespace, matching the source
/// page's habit of padding code cells with tabs and newlines.
fn cell_text(cell: &str) -> String {
    let markup = Regex::new(r"<[^>]*>").expect("markup pattern should be valid regex");

    markup
        .replace_all(cell, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
