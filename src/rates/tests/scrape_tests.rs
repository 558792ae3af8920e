use super::fixtures::{document, rate_row, reference_document};
use crate::rates::scrape::{extract_rates, ScrapeError};

#[test]
fn test_extract_reference_document() {
    let table = extract_rates(&reference_document()).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.names(), &["USD", "MXN", "COL"]);
    assert_eq!(table.rate("USD"), Some(1.0));
    assert_eq!(table.rate("MXN"), Some(17.5));
    assert_eq!(table.rate("COL"), Some(4000.0));
}

#[test]
fn test_extract_ignores_header_rows() {
    // The skeleton's <thead> holds a <tr> of its own; only <tbody> rows count.
    let table = extract_rates(&document(&rate_row("USD", "1.0"))).unwrap();

    assert_eq!(table.len(), 1);
}

#[test]
fn test_extract_strips_markup_and_whitespace_from_code() {
    let row = "<tr><td>\n\t <span>EUR</span> </td><td>Euro</td>\
               <td><strong>0.92</strong></td></tr>";
    let table = extract_rates(&document(row)).unwrap();

    assert_eq!(table.names(), &["EUR"]);
    assert_eq!(table.rate("EUR"), Some(0.92));
}

#[test]
fn test_extract_rate_with_surrounding_whitespace() {
    let row = "<tr><td>JPY</td><td>Yen</td><td><strong> 157.2 </strong></td></tr>";
    let table = extract_rates(&document(row)).unwrap();

    assert_eq!(table.rate("JPY"), Some(157.2));
}

#[test]
fn test_missing_table_body() {
    let err = extract_rates("<html><body><p>moved</p></body></html>").unwrap_err();

    assert!(matches!(err, ScrapeError::TableMissing));
}

#[test]
fn test_empty_table_body() {
    let err = extract_rates(&document("")).unwrap_err();

    assert!(matches!(err, ScrapeError::Empty));
}

#[test]
fn test_row_without_rate_cell() {
    let rows = format!(
        "{}<tr><td>GBP</td><td>Pound</td></tr>",
        rate_row("USD", "1.0")
    );
    let err = extract_rates(&document(&rows)).unwrap_err();

    assert!(
        matches!(err, ScrapeError::MissingCell { row: 2, cell: "rate" }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_row_without_strong_element() {
    let rows = "<tr><td>GBP</td><td>Pound</td><td>0.78</td></tr>";
    let err = extract_rates(&document(rows)).unwrap_err();

    assert!(matches!(err, ScrapeError::MissingCell { row: 1, cell: "rate" }));
}

#[test]
fn test_row_with_unparsable_rate() {
    let rows = rate_row("CHF", "n/a");
    let err = extract_rates(&document(&rows)).unwrap_err();

    match err {
        ScrapeError::BadRate { row, value } => {
            assert_eq!(row, 1);
            assert_eq!(value, "n/a");
        }
        other => panic!("expected BadRate, got {other}"),
    }
}

#[test]
fn test_row_with_blank_code_cell() {
    let rows = "<tr><td> \t </td><td>Mystery</td><td><strong>2.0</strong></td></tr>";
    let err = extract_rates(&document(rows)).unwrap_err();

    assert!(matches!(
        err,
        ScrapeError::MissingCell { row: 1, cell: "currency" }
    ));
}

#[test]
fn test_duplicate_code_aborts_extraction() {
    let rows = [rate_row("USD", "1.0"), rate_row("USD", "1.1")].concat();
    let err = extract_rates(&document(&rows)).unwrap_err();

    match err {
        ScrapeError::DuplicateCode { row, code } => {
            assert_eq!(row, 2);
            assert_eq!(code, "USD");
        }
        other => panic!("expected DuplicateCode, got {other}"),
    }
}

#[test]
fn test_extract_thirty_two_rows() {
    // The observed page serves 32 currencies; make sure a full-size body
    // comes through in order.
    let rows: String = (0..32)
        .map(|i| rate_row(&format!("C{i:02}"), &format!("{}.5", i + 1)))
        .collect();
    let table = extract_rates(&document(&rows)).unwrap();

    assert_eq!(table.len(), 32);
    assert_eq!(table.names()[0], "C00");
    assert_eq!(table.names()[31], "C31");
    assert_eq!(table.rate("C31"), Some(32.5));
}
