//! Embedded Page Data
//!
//! Transient values parsed once from the marker elements' data attributes
//! and discarded after the page is wired.

pub mod alert;
pub mod category;
pub mod stock;

pub use alert::{AlertNotice, Severity};
pub use category::CategoryDistribution;
pub use stock::StockCounts;
