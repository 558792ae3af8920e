//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (quit, reload)
//! and their setup functions

use gtk4::{gio, prelude::*, Application, ApplicationWindow};
use std::rc::Rc;

use crate::rates::RateError;
use crate::ui::Controller;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
}

/// Sets up the reload action
///
/// Creates a GTK action that re-fetches the rate table. The fetch blocks
/// the UI for its duration; a failure leaves the previous table in place
/// and is reported in an alert dialog, worded by the error itself so the
/// user can tell a connection problem from a reshaped source page.
pub fn setup_reload_action(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
) {
    let reload_action = gio::SimpleAction::new("reload", None);
    let controller_for_reload = controller.clone();
    let window_for_reload = window.clone();

    reload_action.connect_activate(move |_, _| {
        eprintln!("🔄 Reloading rates");

        match controller_for_reload.reload_rates() {
            Ok(count) => {
                eprintln!("✅ Loaded {count} rates");
            }
            Err(e) => {
                eprintln!("❌ Reload failed: {e}");

                let message = match &e {
                    RateError::Fetch(_) => "No connection to the rate source",
                    RateError::Scrape(_) => "The rate source page changed shape",
                };

                let dialog = gtk4::AlertDialog::builder()
                    .modal(true)
                    .message(message)
                    .detail(e.to_string())
                    .buttons(vec!["OK"])
                    .build();

                dialog.show(Some(&window_for_reload));
            }
        }
    });

    app.add_action(&reload_action);
}
