//! GridSpec validation tests
//!
//! A spec is plain data until it is built, so identifier validation runs
//! without constructing any widget.

use crate::ui::builders::grid::{GridCell, GridSpec, WidgetKind};
use crate::ui::builders::layout::option_index;

fn entry_cell(row: i32, column: i32, id: &str) -> GridCell {
    GridCell::new(row, column, id, WidgetKind::Entry { editable: true })
}

#[test]
fn test_unique_identifiers_pass_validation() {
    let spec = GridSpec::new(vec![
        entry_cell(1, 0, "have_amount"),
        entry_cell(2, 0, "want_amount"),
    ]);

    assert_eq!(spec.duplicate_id(), None);
}

#[test]
fn test_duplicate_identifier_is_detected() {
    let spec = GridSpec::new(vec![
        entry_cell(1, 0, "amount"),
        entry_cell(2, 0, "amount"),
    ]);

    assert_eq!(spec.duplicate_id(), Some("amount"));
}

#[test]
fn test_overlapping_positions_are_allowed() {
    // Same (row, column) twice is a layout concern, not a model concern.
    let spec = GridSpec::new(vec![
        entry_cell(0, 0, "first"),
        entry_cell(0, 0, "second"),
    ]);

    assert_eq!(spec.duplicate_id(), None);
}

#[test]
fn test_empty_spec_is_valid() {
    let spec = GridSpec::new(Vec::new());

    assert_eq!(spec.duplicate_id(), None);
    assert!(spec.cells().is_empty());
}

#[test]
fn test_option_index_known_codes() {
    assert_eq!(option_index("USD"), 0);
    assert_eq!(option_index("MXN"), 1);
    assert_eq!(option_index("COL"), 2);
}

#[test]
fn test_option_index_falls_back_to_first() {
    assert_eq!(option_index("JPY"), 0);
}
