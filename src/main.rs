//! Pharma Shelf Dashboard
//!
//! Client-side glue for the pharmacy shelf dashboard page, compiled to
//! WebAssembly. The host application renders the markup; this module wires
//! the sidebar and user-menu toggles, draws the stock and category charts
//! from data attributes embedded in the page, and shows the one-shot status
//! alert.
//!
//! # Architecture
//!
//! The module is loaded as a deferred script, so the document is fully
//! parsed by the time `main` runs. `main` installs the panic hook and hands
//! control to [`page::initialize_page`] with the standard capabilities.
//! Every page feature is optional: missing markup or a disabled capability
//! silently skips that feature and nothing else.

mod components;
mod dom;
mod model;
mod page;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    page::initialize_page(page::PageCapabilities::standard());
}
