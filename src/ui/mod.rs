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

//! GTK4 user interface with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: RateProvider + ConverterState (in `rates` and `core` modules)
//! - **View**: GTK4 widgets declared as GridSpecs (in `builders/` submodule)
//! - **Controller**: Mediates between Model and View (in `controller.rs`)
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports and initialisation
//! ├── app.rs          // GTK4 Application setup
//! ├── controller.rs   // MVC Controller
//! ├── registry.rs     // Named widget namespace
//! ├── actions.rs      // GTK action setup (quit, reload)
//! └── builders/       // UI building functions
//! ```

pub mod actions;
pub mod app;
pub mod builders;
pub mod controller;
pub mod registry;

pub use {app::App, controller::Controller, registry::{UiError, WidgetRegistry}};

/// Process exit status for UI configuration errors (duplicate widget
/// identifiers). Distinct from ordinary failures so scripts can tell a
/// broken form declaration from a failed fetch.
pub const CONFIG_ERROR_EXIT: i32 = 9;

#[cfg(test)]
mod tests;
