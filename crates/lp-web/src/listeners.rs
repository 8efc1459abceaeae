//! Native event wiring.
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `Closure::forget`.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, MouseEvent};

use lp_app::{ExitIntentController, PageFeatures, PageInteractionController};
use lp_core::exit_intent::PointerLeave;
use lp_core::ports::SubmittedForm;
use lp_core::EventDisposition;

use crate::describe_js_error;
use crate::dom::{document, resolve};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const MENU_LINK_SELECTOR: &str = "a";
const FORM_SELECTOR: &str = "form";

/// `document.readyState` while the parser is still running.
const READY_STATE_LOADING: &str = "loading";

fn require_document() -> anyhow::Result<Document> {
    document().ok_or_else(|| anyhow!("no document available"))
}

fn listen(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(Event) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(|err| {
            anyhow!(
                "failed to attach {event_type} listener: {}",
                describe_js_error(&err)
            )
        })?;
    closure.forget();
    Ok(())
}

fn apply(event: &Event, disposition: EventDisposition) {
    if disposition.prevents_default() {
        event.prevent_default();
    }
    if disposition.stops_propagation() {
        event.stop_propagation();
    }
}

fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    element_list(root.query_selector_all(selector), selector)
}

fn query_all_in_document(document: &Document, selector: &str) -> Vec<Element> {
    element_list(document.query_selector_all(selector), selector)
}

fn element_list(result: Result<web_sys::NodeList, JsValue>, selector: &str) -> Vec<Element> {
    match result {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(err) => {
            warn!(selector, error = %describe_js_error(&err), "querySelectorAll failed");
            Vec::new()
        }
    }
}

/// `interactive` and `complete` both mean `DOMContentLoaded` already fired.
fn is_parsed(ready_state: &str) -> bool {
    ready_state != READY_STATE_LOADING
}

/// Run `init` once the document is parsed.
pub fn on_dom_ready(init: impl FnOnce() + 'static) -> anyhow::Result<()> {
    let document = require_document()?;
    if is_parsed(&document.ready_state()) {
        init();
        return Ok(());
    }
    let mut init = Some(init);
    listen(&document, "DOMContentLoaded", move |_| {
        if let Some(init) = init.take() {
            init();
        }
    })
}

/// Attach the leave, close and overlay listeners.
///
/// Call after [`ExitIntentController::start`] returned `true`.
pub fn install_exit_intent(controller: &Arc<ExitIntentController>) -> anyhow::Result<()> {
    let document = require_document()?;

    let c = Arc::clone(controller);
    listen(&document, "mouseout", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            c.on_pointer_leave(PointerLeave::mouse_out(
                f64::from(mouse.client_y()),
                mouse.related_target().is_some(),
            ));
        }
    })
    .context("exit intent mouseout")?;

    // Always attached; the controller ignores it until the fallback delay has
    // elapsed.
    let c = Arc::clone(controller);
    listen(&document, "mouseleave", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            c.on_pointer_leave(PointerLeave::document_leave(f64::from(mouse.client_y())));
        }
    })
    .context("exit intent mouseleave")?;

    match resolve(&controller.close_control()) {
        Some(close) => {
            let c = Arc::clone(controller);
            listen(&close, "click", move |_| c.on_close_clicked()).context("exit intent close")?;
        }
        None => debug!(selector = %controller.close_control(), "no close control on exit popup"),
    }

    if let Some(overlay) = resolve(&controller.overlay()) {
        let c = Arc::clone(controller);
        listen(&overlay, "click", move |event| {
            let on_overlay = match (event.target(), event.current_target()) {
                (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
                _ => false,
            };
            c.on_overlay_clicked(on_overlay);
        })
        .context("exit intent overlay")?;
    }

    Ok(())
}

struct WebForm(HtmlFormElement);

impl SubmittedForm for WebForm {
    fn check_validity(&self) -> bool {
        self.0.check_validity()
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            warn!(class, error = %describe_js_error(&err), "failed to mark form");
        }
    }
}

/// Attach navigation, anchor, form and onboarding listeners.
///
/// Sub-features missing from `features` are skipped; the others are wired
/// regardless.
pub fn install_page_interactions(
    controller: &Arc<PageInteractionController>,
    features: PageFeatures,
) -> anyhow::Result<()> {
    let document = require_document()?;

    if features.mobile_menu {
        install_mobile_menu(controller)?;
    }

    for anchor in query_all_in_document(&document, ANCHOR_SELECTOR) {
        let c = Arc::clone(controller);
        listen(&anchor, "click", move |event| {
            let href = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("href"))
                .unwrap_or_default();
            apply(&event, c.smooth_scroll().on_anchor_click(&href));
        })
        .context("anchor click")?;
    }

    for form in query_all_in_document(&document, FORM_SELECTOR) {
        let c = Arc::clone(controller);
        listen(&form, "submit", move |event| {
            let Some(form) = event
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
            else {
                return;
            };
            apply(&event, c.forms().on_submit(&WebForm(form)));
        })
        .context("form submit")?;
    }

    if features.onboarding {
        install_onboarding(controller)?;
    }

    Ok(())
}

fn install_mobile_menu(controller: &Arc<PageInteractionController>) -> anyhow::Result<()> {
    let menu = controller.mobile_menu();
    let (Some(button), Some(menu_el)) = (resolve(&menu.button()), resolve(&menu.menu())) else {
        return Ok(());
    };

    let c = Arc::clone(controller);
    listen(&button, "click", move |_| {
        c.mobile_menu().toggle();
    })
    .context("hamburger click")?;

    for link in query_all(&menu_el, MENU_LINK_SELECTOR) {
        let c = Arc::clone(controller);
        listen(&link, "click", move |_| c.mobile_menu().close()).context("menu link click")?;
    }
    Ok(())
}

fn install_onboarding(controller: &Arc<PageInteractionController>) -> anyhow::Result<()> {
    let Some(button) = resolve(&controller.onboarding().button()) else {
        return Ok(());
    };
    let orchestrator = Arc::clone(controller.onboarding());
    listen(&button, "click", move |_| {
        let orchestrator = Arc::clone(&orchestrator);
        wasm_bindgen_futures::spawn_local(async move {
            orchestrator.on_click().await;
        });
    })
    .context("onboarding click")
}
