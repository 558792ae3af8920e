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

//! Named widget registry
//!
//! Every widget of the window lives in one flat namespace under a unique
//! string identifier. Registration is a checked operation: a second widget
//! under an existing identifier is a configuration error, never a silent
//! overwrite. Handler wiring looks widgets up by identifier and downcasts
//! them to their concrete type.
//!
//! The registry is generic over the handle type so the namespace rules
//! test without a display server; the application instantiates it with
//! `gtk4::Widget`.

use std::collections::HashMap;

use gtk4::prelude::*;
use thiserror::Error;

/// Errors in the declarative UI configuration.
///
/// `DuplicateId` is fatal at startup: the process exits with
/// [`CONFIG_ERROR_EXIT`](crate::ui::CONFIG_ERROR_EXIT) before any partial
/// window is shown.
#[derive(Debug, Error)]
pub enum UiError {
    /// Two widgets were declared under the same identifier.
    #[error("widget identifier '{0}' is already registered")]
    DuplicateId(String),
    /// A handler referenced an identifier nothing was registered under.
    #[error("no widget registered under '{0}'")]
    UnknownId(String),
    /// A handler expected a different widget type under this identifier.
    #[error("widget '{id}' is not a {expected}")]
    WrongKind { id: String, expected: &'static str },
}

/// Flat identifier -> widget map for one window.
pub struct WidgetRegistry<W = gtk4::Widget> {
    widgets: HashMap<String, W>,
}

impl<W> WidgetRegistry<W> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
        }
    }

    /// Registers a widget under a unique identifier.
    ///
    /// Fails with [`UiError::DuplicateId`] when the identifier is taken;
    /// the registry is left unchanged in that case.
    pub fn insert(&mut self, id: &str, widget: W) -> Result<(), UiError> {
        if self.widgets.contains_key(id) {
            return Err(UiError::DuplicateId(id.to_string()));
        }

        self.widgets.insert(id.to_string(), widget);
        Ok(())
    }

    /// Looks a widget up by identifier.
    pub fn get(&self, id: &str) -> Result<&W, UiError> {
        self.widgets
            .get(id)
            .ok_or_else(|| UiError::UnknownId(id.to_string()))
    }

    /// True when the identifier is taken.
    pub fn contains(&self, id: &str) -> bool {
        self.widgets.contains_key(id)
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl<W> Default for WidgetRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetRegistry<gtk4::Widget> {
    /// Looks up a widget and downcasts it to its concrete type.
    ///
    /// # Example
    /// ```ignore
    /// let status: gtk4::Label = registry.downcast("status_label")?;
    /// status.set_text("Convert from USD to MXN:");
    /// ```
    pub fn downcast<T: IsA<gtk4::Widget>>(&self, id: &str) -> Result<T, UiError> {
        self.get(id)?
            .clone()
            .downcast::<T>()
            .map_err(|_| UiError::WrongKind {
                id: id.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }
}
