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

//! Layout builder
//!
//! Declares the converter form and builds it into the widget registry.

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Label, Orientation};

use crate::ui::builders::grid::{build_grid, GridCell, GridSpec, WidgetKind};
use crate::ui::registry::{UiError, WidgetRegistry};
use crate::ui::Controller;

/// The closed set of currencies the pickers offer.
pub const PICKER_OPTIONS: [&str; 3] = ["USD", "MXN", "COL"];

/// Initial "want" selection (the "have" slot starts on the first option).
pub const DEFAULT_WANT: &str = "MXN";

/// Builds the main form layout
///
/// Creates a vertical box containing:
/// - Status label ("Convert from X to Y:")
/// - Grid with the two (quantity entry, currency picker) pairs
/// - Grid with the Invert and Convert buttons
///
/// Every widget lands in the returned registry under its identifier; a
/// duplicate identifier anywhere in the declaration fails the whole build
/// before a window is shown.
///
/// # Returns
///
/// Tuple of (main_vbox, registry)
pub fn build_main_layout(
    controller: &Controller,
) -> Result<(GtkBox, WidgetRegistry), UiError> {
    let mut registry = WidgetRegistry::new();

    let main_vbox = GtkBox::new(Orientation::Vertical, 12);
    main_vbox.set_halign(Align::Center);
    main_vbox.set_valign(Align::Center);

    // Status label sits alone above the grids but shares their namespace.
    let status_label = Label::builder().label(controller.status_line()).build();
    status_label.add_css_class("status-label");
    registry.insert("status_label", status_label.clone().upcast())?;
    main_vbox.append(&status_label);

    // The two (quantity, picker) pairs.
    let options: Vec<String> = PICKER_OPTIONS.iter().map(|s| s.to_string()).collect();
    let pairs = GridSpec::new(vec![
        GridCell::new(1, 0, "have_amount", WidgetKind::Entry { editable: true }),
        GridCell::new(
            1,
            1,
            "have_picker",
            WidgetKind::Picker {
                options: options.clone(),
            },
        ),
        GridCell::new(2, 0, "want_amount", WidgetKind::Entry { editable: false }),
        GridCell::new(2, 1, "want_picker", WidgetKind::Picker { options }),
    ]);
    main_vbox.append(&build_grid(&pairs, &mut registry)?);

    // Action buttons.
    let buttons = GridSpec::new(vec![
        GridCell::new(
            0,
            0,
            "invert_button",
            WidgetKind::Button {
                label: "Invert".to_string(),
            },
        ),
        GridCell::new(
            0,
            1,
            "convert_button",
            WidgetKind::Button {
                label: "Convert".to_string(),
            },
        ),
    ]);
    main_vbox.append(&build_grid(&buttons, &mut registry)?);

    // Start the "want" picker on the configured default, matching the
    // controller's initial state.
    let want_picker: gtk4::DropDown = registry.downcast("want_picker")?;
    want_picker.set_selected(option_index(DEFAULT_WANT));

    Ok((main_vbox, registry))
}

/// Position of a code in the picker options (first option when absent).
pub fn option_index(code: &str) -> u32 {
    PICKER_OPTIONS
        .iter()
        .position(|option| *option == code)
        .unwrap_or(0) as u32
}
