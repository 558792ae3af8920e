//! Event handler setup
//!
//! Wires up all event handlers for the converter form:
//! - Picker selection changes (status label update)
//! - Convert button / Enter in the quantity entry
//! - Invert button

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Button, DropDown, Entry, Label, StringObject};
use std::rc::Rc;

use crate::ui::builders::layout::option_index;
use crate::ui::registry::{UiError, WidgetRegistry};
use crate::ui::Controller;

/// Wires up all event handlers for the converter form
///
/// Sets up:
/// - Selection-changed handlers on both pickers
/// - Convert button click handler (also bound to Enter in the entry)
/// - Invert button click handler
///
/// Widgets are resolved from the registry by identifier; a missing or
/// wrongly-typed identifier is a configuration error.
pub fn wire_up_handlers(
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    registry: &WidgetRegistry,
) -> Result<(), UiError> {
    let status_label: Label = registry.downcast("status_label")?;
    let have_amount: Entry = registry.downcast("have_amount")?;
    let want_amount: Entry = registry.downcast("want_amount")?;
    let have_picker: DropDown = registry.downcast("have_picker")?;
    let want_picker: DropDown = registry.downcast("want_picker")?;
    let convert_button: Button = registry.downcast("convert_button")?;
    let invert_button: Button = registry.downcast("invert_button")?;

    // ============================================================================
    // Picker selection handlers
    // ============================================================================
    let controller_for_have = controller.clone();
    let status_for_have = status_label.clone();

    have_picker.connect_selected_notify(move |picker| {
        if let Some(code) = selected_code(picker) {
            eprintln!("💱 Have currency: {code}");
            controller_for_have.set_have(&code);
            status_for_have.set_text(&controller_for_have.status_line());
        }
    });

    let controller_for_want = controller.clone();
    let status_for_want = status_label.clone();

    want_picker.connect_selected_notify(move |picker| {
        if let Some(code) = selected_code(picker) {
            eprintln!("💱 Want currency: {code}");
            controller_for_want.set_want(&code);
            status_for_want.set_text(&controller_for_want.status_line());
        }
    });

    // ============================================================================
    // Convert: button click and Enter in the quantity entry
    // ============================================================================
    let window_for_convert = window.clone();
    let controller_for_convert = controller.clone();
    let have_for_convert = have_amount.clone();
    let want_for_convert = want_amount.clone();

    convert_button.connect_clicked(move |_| {
        run_convert(
            &controller_for_convert,
            &have_for_convert,
            &want_for_convert,
            &window_for_convert,
        );
    });

    let window_for_activate = window.clone();
    let controller_for_activate = controller.clone();
    let want_for_activate = want_amount.clone();

    have_amount.connect_activate(move |entry| {
        run_convert(
            &controller_for_activate,
            entry,
            &want_for_activate,
            &window_for_activate,
        );
    });

    // ============================================================================
    // Invert button handler
    // ============================================================================
    let controller_for_invert = controller.clone();
    let have_for_invert = have_amount.clone();
    let want_for_invert = want_amount.clone();
    let have_picker_for_invert = have_picker.clone();
    let want_picker_for_invert = want_picker.clone();
    let status_for_invert = status_label.clone();

    invert_button.connect_clicked(move |_| {
        eprintln!("🔁 Invert clicked");

        // Pull the editable entry into the state before swapping.
        controller_for_invert.set_have_amount(&have_for_invert.text());
        let state = controller_for_invert.invert();

        have_for_invert.set_text(&state.have_amount);
        want_for_invert.set_text(&state.want_amount);
        have_picker_for_invert.set_selected(option_index(&state.have));
        want_picker_for_invert.set_selected(option_index(&state.want));
        status_for_invert.set_text(&state.status_line());
    });

    Ok(())
}

/// Runs one conversion: entry text -> controller -> result entry.
///
/// Failures (bad quantity, code missing from the live table) surface in
/// an alert dialog rather than crashing the callback.
fn run_convert(
    controller: &Controller,
    have_amount: &Entry,
    want_amount: &Entry,
    window: &ApplicationWindow,
) {
    controller.set_have_amount(&have_amount.text());

    match controller.convert_current() {
        Ok(value) => {
            eprintln!("✅ Converted: {value}");
            want_amount.set_text(&controller.state().want_amount);
        }
        Err(e) => {
            eprintln!("❌ Conversion failed: {e}");

            let dialog = gtk4::AlertDialog::builder()
                .modal(true)
                .message("Conversion failed")
                .detail(e.to_string())
                .buttons(vec!["OK"])
                .build();

            dialog.show(Some(window));
        }
    }
}

/// The currently selected option of a picker, as its string value.
fn selected_code(picker: &DropDown) -> Option<String> {
    picker
        .selected_item()
        .and_downcast::<StringObject>()
        .map(|object| object.string().to_string())
}
