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

//! Declarative grid construction
//!
//! A [`GridSpec`] describes one rectangular group of widgets as a list of
//! (row, column, identifier, kind) cells. Building it creates a single
//! `gtk4::Grid`, places every member at its declared position, and
//! registers every member in the window's [`WidgetRegistry`] - the grid is
//! only handed back for packing once all members succeeded, so a bad spec
//! never produces a partially shown group.
//!
//! The widget kinds form a closed set; callbacks are wired afterwards by
//! `handlers.rs` through registry lookups, keeping the layout declaration
//! free of closures.

use std::collections::HashSet;

use gtk4::prelude::*;
use gtk4::{Button, DropDown, Entry, Grid, Label, StringList, Widget};

use crate::ui::registry::{UiError, WidgetRegistry};

/// The closed set of widget constructors a grid cell can ask for.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    /// Static text.
    Label { text: String },
    /// Single-line text entry. Non-editable entries still accept
    /// programmatic updates.
    Entry { editable: bool },
    /// Push button; the click callback is wired by the handler layer.
    Button { label: String },
    /// Dropdown over a fixed option list, initialised to the first option.
    Picker { options: Vec<String> },
}

/// One cell of a grid: where, what, and under which identifier.
#[derive(Clone, Debug)]
pub struct GridCell {
    pub row: i32,
    pub column: i32,
    pub id: String,
    pub kind: WidgetKind,
}

impl GridCell {
    pub fn new(row: i32, column: i32, id: &str, kind: WidgetKind) -> Self {
        Self {
            row,
            column,
            id: id.to_string(),
            kind,
        }
    }
}

/// Declarative description of one rectangular widget group.
///
/// Row/column pairs may repeat (overlap is a layout concern, not a model
/// concern); identifiers must be unique, both within the spec and across
/// the window's registry.
#[derive(Clone, Debug, Default)]
pub struct GridSpec {
    cells: Vec<GridCell>,
}

impl GridSpec {
    pub fn new(cells: Vec<GridCell>) -> Self {
        Self { cells }
    }

    /// The declared cells, in declaration order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// First identifier declared more than once, if any.
    pub fn duplicate_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();

        self.cells
            .iter()
            .find(|cell| !seen.insert(cell.id.as_str()))
            .map(|cell| cell.id.as_str())
    }
}

/// Builds a spec into a live grid, registering every member.
///
/// Identifier clashes - within the spec or against widgets already in the
/// registry - are detected before any widget is constructed, so a failed
/// build leaves both the registry and the widget tree untouched.
pub fn build_grid(spec: &GridSpec, registry: &mut WidgetRegistry) -> Result<Grid, UiError> {
    if let Some(id) = spec.duplicate_id() {
        return Err(UiError::DuplicateId(id.to_string()));
    }

    for cell in spec.cells() {
        if registry.contains(&cell.id) {
            return Err(UiError::DuplicateId(cell.id.clone()));
        }
    }

    let grid = Grid::builder().row_spacing(6).column_spacing(12).build();

    for cell in spec.cells() {
        let widget = build_widget(&cell.kind);
        grid.attach(&widget, cell.column, cell.row, 1, 1);
        registry.insert(&cell.id, widget)?;
    }

    Ok(grid)
}

/// Constructs one widget of the requested kind.
fn build_widget(kind: &WidgetKind) -> Widget {
    match kind {
        WidgetKind::Label { text } => Label::builder().label(text.as_str()).build().upcast(),
        WidgetKind::Entry { editable } => {
            let entry = Entry::builder().build();
            entry.set_editable(*editable);
            entry.upcast()
        }
        WidgetKind::Button { label } => Button::builder().label(label.as_str()).build().upcast(),
        WidgetKind::Picker { options } => {
            let options: Vec<&str> = options.iter().map(String::as_str).collect();
            let model = StringList::new(&options);

            let picker = DropDown::builder().model(&model).build();
            picker.set_selected(0);
            picker.upcast()
        }
    }
}
