// Copyright 2025 bakri (tidynest@proton.me)
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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the converter window. It uses the Controller to run conversions.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller over the injected rate provider
//!   ├─ Builds the fixed-size form from its GridSpec declaration
//!   └─ Wires handlers and actions to the Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::rc::Rc;

use crate::rates::RateProvider;
use crate::ui::actions::{setup_quit_action, setup_reload_action};
use crate::ui::builders::layout::{DEFAULT_WANT, PICKER_OPTIONS};
use crate::ui::builders::{build_header_bar, build_main_layout, wire_up_handlers};
use crate::ui::registry::UiError;
use crate::ui::{Controller, CONFIG_ERROR_EXIT};

/// GTK4 Application for the currency converter
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App over an already-loaded rate provider
    ///
    /// The provider is injected so the window can run against a live
    /// source or a fixed table alike; the caller decides and performs
    /// the initial (blocking) load before the UI exists.
    pub fn new(provider: Rc<dyn RateProvider>) -> Self {
        // Create GTK4 Application
        let app = Application::builder()
            .application_id("com.tidynest.cambio")
            .build();

        let controller = Rc::new(Controller::new(provider, PICKER_OPTIONS[0], DEFAULT_WANT));

        Self { app, controller }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop. Call this after creating the App.
    /// The function blocks until the application exits.
    pub fn run(self) {
        let controller = self.controller.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        // Run the application (blocks until exit)
        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let provider = CssProvider::new();
        let css = include_str!("style.css");
        provider.load_from_string(css);

        // Apply CSS to the default display
        if let Some(display) = gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
    }

    /// Builds the converter window
    ///
    /// This is called when the application activates. A configuration
    /// error in the form declaration (duplicate widget identifier) is
    /// fatal: nothing is shown and the process exits with a distinct
    /// status naming the identifier.
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        // Load custom CSS styling
        Self::load_css();

        // Create the fixed-size application window
        let window = ApplicationWindow::builder()
            .application(app)
            .title("Money Converter")
            .default_width(420)
            .default_height(300)
            .resizable(false)
            .build();

        window.set_titlebar(Some(&build_header_bar()));

        let (main_vbox, registry) = match build_main_layout(&controller) {
            Ok(built) => built,
            Err(e) => fail_configuration(&e),
        };

        if let Err(e) = wire_up_handlers(&window, controller.clone(), &registry) {
            fail_configuration(&e);
        }

        setup_quit_action(app);
        setup_reload_action(app, &window, controller);

        // Set window content
        window.set_child(Some(&main_vbox));

        // Show window
        window.present();
    }
}

/// Reports a UI configuration error and terminates.
///
/// Duplicate widget identifiers are a programming error in the form
/// declaration; no partial window is ever shown for them.
fn fail_configuration(err: &UiError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(CONFIG_ERROR_EXIT);
}
