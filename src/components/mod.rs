//! Page Components
//!
//! Wiring and widgets for each optional page section.

pub mod alert;
pub mod chart;
pub mod sidebar;
pub mod user_menu;

pub use alert::{AlertPresenter, ModalAlertPresenter};
pub use chart::{CanvasChartRenderer, ChartRenderer};
