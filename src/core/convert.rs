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

//! Conversion arithmetic
//!
//! Converts a quantity between two currencies of a [`RateTable`]. Every
//! rate is expressed as units of that currency per one unit of the table's
//! base currency, so the conversion is the ratio of the two rates:
//!
//! ```text
//! converted = quantity * rate[to] / rate[from]
//! ```
//!
//! Equal source and target codes short-circuit to the identity, and a
//! round trip through any pair returns the original quantity (up to float
//! rounding).

use thiserror::Error;

use crate::core::types::RateTable;

/// Errors produced while converting a quantity.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Selected code has no entry in the current rate table.
    #[error("unknown currency '{0}' in current rate table")]
    UnknownCurrency(String),
    /// Table carries a zero or negative rate for this code.
    #[error("unusable rate {rate} for currency '{code}'")]
    BadRate { code: String, rate: f64 },
    /// Quantity field did not hold a number.
    #[error("cannot parse quantity '{0}' as a number")]
    BadQuantity(String),
}

/// Converts `quantity` units of `from` into units of `to`.
///
/// Returns the identity when both codes are equal, without consulting the
/// table. Otherwise both codes must be present with positive rates.
pub fn convert(
    table: &RateTable,
    quantity: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConvertError> {
    if from == to {
        return Ok(quantity);
    }

    let from_rate = lookup(table, from)?;
    let to_rate = lookup(table, to)?;

    Ok(quantity * to_rate / from_rate)
}

/// Parses the text of a quantity entry.
///
/// Leading and trailing whitespace is ignored; anything else that is not a
/// plain floating point number is rejected.
pub fn parse_quantity(text: &str) -> Result<f64, ConvertError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ConvertError::BadQuantity(text.to_string()))
}

fn lookup(table: &RateTable, code: &str) -> Result<f64, ConvertError> {
    let rate = table
        .rate(code)
        .ok_or_else(|| ConvertError::UnknownCurrency(code.to_string()))?;

    if rate <= 0.0 {
        return Err(ConvertError::BadRate {
            code: code.to_string(),
            rate,
        });
    }

    Ok(rate)
}
