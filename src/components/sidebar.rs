//! Sidebar Toggle
//!
//! Flips the body-level marker class the stylesheet keys off.

use gloo_events::EventListener;
use web_sys::Document;

use crate::dom;

const TOGGLE_SELECTOR: &str = ".pharma-sidebar-toggle";
const SIDEBAR_SELECTOR: &str = ".pharma-sidebar";
const OPEN_CLASS: &str = "pharma-sidebar-open";

/// Bind the sidebar toggle. Skipped silently when the page has no sidebar
/// or no toggle control.
pub fn wire(document: &Document) {
    let Some(toggle) = dom::query(document, TOGGLE_SELECTOR) else {
        return;
    };
    if dom::query(document, SIDEBAR_SELECTOR).is_none() {
        return;
    }

    let document = document.clone();
    EventListener::new(&toggle, "click", move |event| {
        event.prevent_default();
        event.stop_propagation();
        if let Some(body) = dom::body(&document) {
            dom::toggle_class(&body, OPEN_CLASS);
        }
    })
    .forget();
}
