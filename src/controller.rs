//! Debounced background refresh of a report page's results region.
//!
//! One controller is created per qualifying page load. A single delegated
//! `change` listener on the document feeds the debounce timer, so controls
//! inserted by a content swap are reactive without any re-binding.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_utils::{document, window};
use log::{debug, error};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomParser, Element, Event, HtmlFormElement, SupportedType};

use crate::config::{DEBOUNCE_MS, FORM_SELECTOR, RESULTS_CONTAINER_SELECTOR, TRIGGER_SELECTOR};
use crate::net::post_form;
use crate::routes::RouteRegistry;
use crate::ui::StatusUi;

struct Inner {
    busy: Cell<bool>,
    pending: Rc<RefCell<Option<Timeout>>>,
    ui: StatusUi,
}

/// Coalesces bursts of date/time control changes into one background POST
/// and splices the returned fragment into the results container.
pub struct ReloadController {
    inner: Rc<Inner>,
    change_listener: Closure<dyn FnMut(Event)>,
}

impl ReloadController {
    /// Activate on the current page. Returns `None` without touching the
    /// DOM when the page's path has not opted into the behavior.
    pub fn activate(registry: &RouteRegistry) -> Option<Self> {
        let path = window().location().pathname().ok()?;
        if !registry.is_enabled(&path) {
            debug!("auto-reload: {} is not an enabled route", path);
            return None;
        }

        let doc = document();
        let ui = match StatusUi::new(&doc) {
            Ok(ui) => ui,
            Err(err) => {
                error!("auto-reload: could not set up status elements: {:?}", err);
                return None;
            }
        };

        let inner = Rc::new(Inner {
            busy: Cell::new(false),
            pending: Rc::new(RefCell::new(None)),
            ui,
        });

        let change_listener = {
            let inner = Rc::clone(&inner);
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let is_trigger = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .is_some_and(|el| is_reload_trigger(&el));
                if is_trigger {
                    schedule_reload(&inner);
                }
            })
        };

        if doc
            .add_event_listener_with_callback("change", change_listener.as_ref().unchecked_ref())
            .is_err()
        {
            error!("auto-reload: could not install change listener");
            return None;
        }

        debug!("auto-reload active on {}", path);
        Some(Self {
            inner,
            change_listener,
        })
    }

    /// Whether a round trip is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.inner.busy.get()
    }

    /// Whether a debounced reload is armed but has not fired yet.
    pub fn has_pending(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }

    /// Trigger a reload immediately, bypassing the debounce window.
    pub fn reload_now(&self) {
        reload(&self.inner);
    }
}

impl Drop for ReloadController {
    fn drop(&mut self) {
        let _ = document().remove_event_listener_with_callback(
            "change",
            self.change_listener.as_ref().unchecked_ref(),
        );
    }
}

/// Whether an element is one of the recognized date/time controls.
pub fn is_reload_trigger(element: &Element) -> bool {
    element.matches(TRIGGER_SELECTOR).unwrap_or(false)
}

/// Arm `action` to run after `delay_ms`, cancelling any previously pending
/// run. Only the last call inside the window fires.
pub fn debounce(pending: &Rc<RefCell<Option<Timeout>>>, delay_ms: u32, action: impl FnOnce() + 'static) {
    let slot = Rc::clone(pending);
    let handle = Timeout::new(delay_ms, move || {
        slot.borrow_mut().take();
        action();
    });
    // Replacing the stored handle drops the previous timer, cancelling it.
    *pending.borrow_mut() = Some(handle);
}

fn schedule_reload(inner: &Rc<Inner>) {
    let target = Rc::clone(inner);
    debounce(&inner.pending, DEBOUNCE_MS, move || reload(&target));
}

fn reload(inner: &Rc<Inner>) {
    if inner.busy.get() {
        debug!("auto-reload: request already in flight, skipping");
        return;
    }

    let doc = document();
    // A page without the designated form has nothing to refresh.
    let form = match doc.query_selector(FORM_SELECTOR) {
        Ok(Some(el)) => match el.dyn_into::<HtmlFormElement>() {
            Ok(form) => form,
            Err(_) => return,
        },
        _ => return,
    };

    inner.busy.set(true);
    inner.ui.show_loading();

    let path = window()
        .location()
        .pathname()
        .unwrap_or_else(|_| String::from("/"));

    let inner = Rc::clone(inner);
    wasm_bindgen_futures::spawn_local(async move {
        match post_form(&path, &form).await {
            Ok(markup) => swap_content(&doc, &markup),
            Err(err) => {
                error!("auto-reload failed: {}", err);
                inner.ui.show_error();
            }
        }
        // Runs on success and failure alike, mirroring a finally block.
        inner.busy.set(false);
        inner.ui.hide_loading();
    });
}

/// Splice the results container from `markup` into the live document.
/// Skipped silently when either side lacks the container marker.
pub fn swap_content(live: &Document, markup: &str) {
    let parsed = match DomParser::new()
        .and_then(|parser| parser.parse_from_string(markup, SupportedType::TextHtml))
    {
        Ok(doc) => doc,
        Err(err) => {
            error!("auto-reload: response was not parseable markup: {:?}", err);
            return;
        }
    };

    let incoming = parsed.query_selector(RESULTS_CONTAINER_SELECTOR).ok().flatten();
    let current = live.query_selector(RESULTS_CONTAINER_SELECTOR).ok().flatten();

    if let (Some(incoming), Some(current)) = (incoming, current) {
        current.set_inner_html(&incoming.inner_html());
    }
}
