//! User Menu Toggle
//!
//! Dropdown open/close with the click-outside-to-close pattern.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::Document;

use crate::dom;

const MENU_SELECTOR: &str = ".pharma-user-menu";
const TOGGLE_SELECTOR: &str = ".pharma-user-toggle";
const OPEN_CLASS: &str = "open";

/// Menu open/closed flag shared by the toggle and document listeners.
///
/// The toggle listener stops propagation, so a click on the toggle reaches
/// `on_toggle_click` only; any other click reaches `on_document_click`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Invert the flag, returning the new state.
    pub fn on_toggle_click(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu, returning whether it was open.
    pub fn on_document_click(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Bind the user-menu toggle and the document-wide close handler. Skipped
/// silently when either element is missing.
pub fn wire(document: &Document) {
    let Some(menu) = dom::query(document, MENU_SELECTOR) else {
        return;
    };
    let Some(toggle) = dom::query(document, TOGGLE_SELECTOR) else {
        return;
    };

    let state = Rc::new(RefCell::new(MenuState::default()));

    {
        let state = Rc::clone(&state);
        let menu = menu.clone();
        EventListener::new(&toggle, "click", move |event| {
            event.stop_propagation();
            let open = state.borrow_mut().on_toggle_click();
            dom::set_class(&menu, OPEN_CLASS, open);
        })
        .forget();
    }

    EventListener::new(document, "click", move |_event| {
        if state.borrow_mut().on_document_click() {
            dom::set_class(&menu, OPEN_CLASS, false);
        }
    })
    .forget();
}
