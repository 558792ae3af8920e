use crate::core::types::RateTable;

fn sample_table() -> RateTable {
    let mut table = RateTable::new();
    assert!(table.insert("USD", 1.0));
    assert!(table.insert("MXN", 17.5));
    assert!(table.insert("COL", 4000.0));
    table
}

#[test]
fn test_names_match_rate_keys() {
    let table = sample_table();

    assert_eq!(table.names().len(), table.rates().len());
    for code in table.names() {
        assert!(
            table.rates().contains_key(code),
            "names() returned '{}' with no rate entry",
            code
        );
    }
}

#[test]
fn test_names_preserve_insertion_order() {
    let table = sample_table();

    assert_eq!(table.names(), &["USD", "MXN", "COL"]);
}

#[test]
fn test_duplicate_code_is_rejected() {
    let mut table = sample_table();

    assert!(!table.insert("USD", 2.0), "duplicate insert should fail");
    assert_eq!(table.rate("USD"), Some(1.0), "original rate must survive");
    assert_eq!(table.len(), 3, "rejected insert must not grow the table");
}

#[test]
fn test_rate_lookup() {
    let table = sample_table();

    assert_eq!(table.rate("MXN"), Some(17.5));
    assert_eq!(table.rate("JPY"), None);
}

#[test]
fn test_empty_table() {
    let table = RateTable::new();

    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert!(table.names().is_empty());
}

#[test]
fn test_table_display_mentions_count() {
    let table = sample_table();
    let display = format!("{}", table);

    assert!(display.starts_with("3 rates"));
}
