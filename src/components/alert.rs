//! Status Alert Modal
//!
//! One-shot modal notification mounted next to the host markup.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::model::{AlertNotice, Severity};

/// Modal alert capability. The page controller only ever talks to this
/// trait; [`ModalAlertPresenter`] is the standard backend.
pub trait AlertPresenter {
    fn present(&self, notice: &AlertNotice);
}

/// Standard presenter: mounts the [`AlertModal`] component into a host
/// node appended to `document.body`.
pub struct ModalAlertPresenter;

impl AlertPresenter for ModalAlertPresenter {
    fn present(&self, notice: &AlertNotice) {
        let Some(document) = dom::document() else {
            return;
        };
        let Some(body) = dom::body(&document) else {
            return;
        };
        let Ok(host) = document.create_element("div") else {
            return;
        };
        if body.append_child(&host).is_err() {
            return;
        }
        let Ok(host) = host.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        let severity = notice.severity();
        let message = notice.message.clone();
        mount_to(host, move || view! { <AlertModal severity=severity message=message /> });
    }
}

/// The modal itself. Success notices arm a dismiss timer; everything else
/// waits for the confirm button.
#[component]
pub fn AlertModal(severity: Severity, #[prop(into)] message: String) -> impl IntoView {
    let visible = create_rw_signal(true);

    if let Some(ms) = severity.auto_dismiss_ms() {
        gloo_timers::callback::Timeout::new(ms, move || visible.set(false)).forget();
    }

    view! {
        {move || {
            let message = message.clone();
            visible.get().then(|| view! {
                <div
                    class="pharma-alert-overlay"
                    style="position: fixed; inset: 0; z-index: 50; display: flex; \
                           align-items: center; justify-content: center; \
                           background: rgba(15, 23, 42, 0.45);"
                >
                    <div
                        class=format!("pharma-alert pharma-alert-{}", severity.css_name())
                        style="background: #ffffff; border-radius: 8px; padding: 24px 32px; \
                               min-width: 280px; max-width: 420px; text-align: center; \
                               box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);"
                    >
                        <span class="pharma-alert-icon" style="font-size: 2rem;">
                            {severity.glyph()}
                        </span>
                        <h2 class="pharma-alert-title" style="margin: 8px 0 4px;">
                            {severity.title()}
                        </h2>
                        <p class="pharma-alert-text" style="margin: 0 0 12px; color: #374151;">
                            {message}
                        </p>
                        {severity.requires_confirmation().then(|| view! {
                            <button
                                class="pharma-alert-confirm"
                                style="padding: 8px 24px; border: none; border-radius: 6px; \
                                       background: #1d4ed8; color: #ffffff; cursor: pointer;"
                                on:click=move |_| visible.set(false)
                            >
                                "OK"
                            </button>
                        })}
                    </div>
                </div>
            })
        }}
    }
}
