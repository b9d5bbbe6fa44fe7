//! Owned loading-indicator and error-toast resources.
//!
//! The controller constructs one [`StatusUi`] up front and keeps handles to
//! the shared elements, instead of re-querying selectors on every use.

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::config::{
    ERROR_TOAST_CLASS, ERROR_TOAST_MS, LOADING_INDICATOR_CLASS, RELOAD_ERROR_MESSAGE,
};

const TOAST_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
     background: #ff4444; color: white; padding: 10px 20px; \
     border-radius: 4px; z-index: 1000;";

/// Shared loading indicator plus transient error toast for one page.
pub struct StatusUi {
    document: Document,
    indicator: HtmlElement,
}

impl StatusUi {
    /// Ensure the shared indicator element exists and keep a handle to it.
    /// Reuses a pre-existing element, so repeated construction is idempotent.
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let selector = format!(".{}", LOADING_INDICATOR_CLASS);
        let indicator = match document.query_selector(&selector)? {
            Some(existing) => existing.dyn_into::<HtmlElement>()?,
            None => {
                let el = document
                    .create_element("div")?
                    .dyn_into::<HtmlElement>()?;
                el.set_class_name(LOADING_INDICATOR_CLASS);
                el.set_inner_html(
                    r#"<div class="loading-spinner"><div class="spinner"></div><span>Loading...</span></div>"#,
                );
                el.style().set_property("display", "none")?;
                if let Some(body) = document.body() {
                    body.append_child(&el)?;
                }
                el
            }
        };

        Ok(Self {
            document: document.clone(),
            indicator,
        })
    }

    pub fn show_loading(&self) {
        let _ = self.indicator.style().set_property("display", "flex");
    }

    pub fn hide_loading(&self) {
        let _ = self.indicator.style().set_property("display", "none");
    }

    /// Pop a fixed-position error toast that removes itself after
    /// [`ERROR_TOAST_MS`] if still attached. Earlier removal by other page
    /// code is fine; the timer checks connectivity before removing.
    pub fn show_error(&self) {
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(err) => {
                warn!("could not create error toast: {:?}", err);
                return;
            }
        };
        el.set_class_name(ERROR_TOAST_CLASS);
        el.set_text_content(Some(RELOAD_ERROR_MESSAGE));
        let _ = el.set_attribute("style", TOAST_STYLE);

        let Some(body) = self.document.body() else {
            return;
        };
        if body.append_child(&el).is_err() {
            return;
        }

        Timeout::new(ERROR_TOAST_MS, move || {
            if el.is_connected() {
                el.remove();
            }
        })
        .forget();
    }
}
