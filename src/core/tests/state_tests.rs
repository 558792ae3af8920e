use crate::core::types::ConverterState;

#[test]
fn test_invert_swaps_selections_and_amounts() {
    let mut state = ConverterState::new("USD", "MXN");
    state.have_amount = "10".to_string();
    state.want_amount = "175".to_string();

    state.invert();

    assert_eq!(state.have, "MXN");
    assert_eq!(state.want, "USD");
    assert_eq!(state.have_amount, "175");
    assert_eq!(state.want_amount, "10");
}

#[test]
fn test_invert_is_involutive() {
    let mut state = ConverterState::new("USD", "MXN");
    state.have_amount = "1.5".to_string();
    state.want_amount = "26.25".to_string();
    let original = state.clone();

    state.invert();
    assert_ne!(state, original, "a single invert must change the state");

    state.invert();
    assert_eq!(state, original, "invert applied twice must restore the state");
}

#[test]
fn test_status_line_follows_selection() {
    let mut state = ConverterState::new("USD", "MXN");
    assert_eq!(state.status_line(), "Convert from USD to MXN:");

    state.invert();
    assert_eq!(state.status_line(), "Convert from MXN to USD:");
}

#[test]
fn test_new_state_has_empty_amounts() {
    let state = ConverterState::new("USD", "COL");

    assert!(state.have_amount.is_empty());
    assert!(state.want_amount.is_empty());
}
