//! DOM Access Helpers
//!
//! Thin Option-returning wrappers over `web_sys` lookups. Every accessor
//! collapses `Err`/`None` from the underlying API into `None` so callers
//! can guard with `let .. else` and skip the feature.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn body(document: &Document) -> Option<HtmlElement> {
    document.body()
}

/// First element matching a CSS selector.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn element_by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn canvas_by_id(document: &Document, id: &str) -> Option<HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

/// Read a `data-<name>` attribute from a marker element.
pub fn data_attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{}", name))
}

/// Flip `class`, adding it when absent and removing it when present.
pub fn toggle_class(element: &Element, class: &str) {
    let _ = element.class_list().toggle(class);
}

/// Force `class` on or off.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Console warning. No-op off WASM so host unit tests can exercise the
/// parse paths that report through here.
#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn data_attr_reads_marker_attributes() {
        let document = document().unwrap();
        let marker = document.create_element("div").unwrap();
        marker.set_attribute("data-in-stock", "12").unwrap();

        assert_eq!(data_attr(&marker, "in-stock").as_deref(), Some("12"));
        assert_eq!(data_attr(&marker, "out-of-stock"), None);
    }

    #[wasm_bindgen_test]
    fn set_class_adds_and_removes() {
        let document = document().unwrap();
        let element = document.create_element("div").unwrap();

        set_class(&element, "open", true);
        assert!(element.class_list().contains("open"));
        set_class(&element, "open", false);
        assert!(!element.class_list().contains("open"));
    }
}
