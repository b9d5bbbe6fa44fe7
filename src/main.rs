//! Wasm entry point: wires console diagnostics and activates the reload
//! controller once the DOM is ready.

use std::cell::RefCell;

use auto_reload::{ReloadController, RouteRegistry};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

thread_local! {
    /// Keeps the controller, and with it the delegated change listener,
    /// alive for the page's lifetime.
    static CONTROLLER: RefCell<Option<ReloadController>> = const { RefCell::new(None) };
}

fn activate() {
    let registry = RouteRegistry::with_defaults();
    if let Some(controller) = ReloadController::activate(&registry) {
        CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let document = gloo_utils::document();
    if document.ready_state() == "loading" {
        let once = Closure::once_into_js(activate);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", once.unchecked_ref());
    } else {
        activate();
    }
}
