//! Page Controller
//!
//! One-shot wiring of the dashboard page: sidebar, user menu, charts and
//! the status alert. Every step is guarded by presence checks so a page
//! without the matching markup silently skips that feature and nothing
//! else.

use std::rc::Rc;

use web_sys::Document;

use crate::components::chart::{self, CanvasChartRenderer, ChartRenderer};
use crate::components::{sidebar, user_menu, AlertPresenter, ModalAlertPresenter};
use crate::dom;
use crate::model::{AlertNotice, CategoryDistribution, StockCounts};

const DASHBOARD_DATA_ID: &str = "pharma-dashboard-data";
const STOCK_CANVAS_ID: &str = "stockChart";
const CATEGORY_CANVAS_ID: &str = "categoryChart";
const ALERT_ID: &str = "pharma-drug-alert";

/// Optional capabilities injected into the controller. `None` disables the
/// corresponding feature; the toggle wiring never needs a capability.
pub struct PageCapabilities {
    pub charts: Option<Rc<dyn ChartRenderer>>,
    pub alerts: Option<Rc<dyn AlertPresenter>>,
}

impl PageCapabilities {
    /// Built-in canvas renderer and modal presenter.
    pub fn standard() -> Self {
        Self {
            charts: Some(Rc::new(CanvasChartRenderer)),
            alerts: Some(Rc::new(ModalAlertPresenter)),
        }
    }

    /// Charts and alerts off; toggle wiring still runs.
    pub fn disabled() -> Self {
        Self {
            charts: None,
            alerts: None,
        }
    }
}

/// Wire the whole page once. Invoked by `main` after the document is
/// parsed. The four setup actions are independent and unordered.
pub fn initialize_page(capabilities: PageCapabilities) {
    let Some(document) = dom::document() else {
        return;
    };

    sidebar::wire(&document);
    user_menu::wire(&document);
    wire_charts(&document, capabilities.charts.as_deref());
    wire_alert(&document, capabilities.alerts.as_deref());
}

fn wire_charts(document: &Document, renderer: Option<&dyn ChartRenderer>) {
    let Some(renderer) = renderer else {
        return;
    };
    let Some(marker) = dom::element_by_id(document, DASHBOARD_DATA_ID) else {
        return;
    };

    let stock = StockCounts::from_attrs(
        dom::data_attr(&marker, "in-stock").as_deref(),
        dom::data_attr(&marker, "out-of-stock").as_deref(),
    );
    if let Some(canvas) = dom::canvas_by_id(document, STOCK_CANVAS_ID) {
        renderer.doughnut(&canvas, &chart::stock_slices(&stock));
    }

    let categories = CategoryDistribution::from_attrs(
        dom::data_attr(&marker, "category-labels").as_deref(),
        dom::data_attr(&marker, "category-counts").as_deref(),
    );
    if categories.is_renderable() {
        if let Some(canvas) = dom::canvas_by_id(document, CATEGORY_CANVAS_ID) {
            renderer.pie(&canvas, &chart::category_slices(&categories));
        }
    }
}

fn wire_alert(document: &Document, presenter: Option<&dyn AlertPresenter>) {
    let Some(presenter) = presenter else {
        return;
    };
    let Some(marker) = dom::element_by_id(document, ALERT_ID) else {
        return;
    };

    let notice = AlertNotice::from_attrs(
        dom::data_attr(&marker, "status"),
        dom::data_attr(&marker, "message"),
    );
    if notice.is_displayable() {
        presenter.present(&notice);
    }
}
