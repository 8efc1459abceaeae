use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use lp_core::ports::DomPort;
use lp_core::ElementRef;

use crate::describe_js_error;

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Resolve an [`ElementRef`] against the live document.
pub fn resolve(element: &ElementRef) -> Option<Element> {
    let document = document()?;
    match element {
        ElementRef::Id(id) => document.get_element_by_id(id),
        ElementRef::Selector(selector) => match document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                warn!(%selector, error = %describe_js_error(&err), "invalid selector");
                None
            }
        },
        ElementRef::Body => document.body().map(Element::from),
    }
}

/// [`DomPort`] over `window.document`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebDom;

impl WebDom {
    pub fn new() -> Self {
        Self
    }
}

impl DomPort for WebDom {
    fn exists(&self, element: &ElementRef) -> bool {
        resolve(element).is_some()
    }

    fn has_class(&self, element: &ElementRef, class: &str) -> bool {
        resolve(element).is_some_and(|el| el.class_list().contains(class))
    }

    fn add_class(&self, element: &ElementRef, class: &str) {
        if let Some(el) = resolve(element) {
            if let Err(err) = el.class_list().add_1(class) {
                warn!(%element, class, error = %describe_js_error(&err), "failed to add class");
            }
        }
    }

    fn remove_class(&self, element: &ElementRef, class: &str) {
        if let Some(el) = resolve(element) {
            if let Err(err) = el.class_list().remove_1(class) {
                warn!(%element, class, error = %describe_js_error(&err), "failed to remove class");
            }
        }
    }

    fn toggle_class(&self, element: &ElementRef, class: &str, force: Option<bool>) -> bool {
        let Some(el) = resolve(element) else {
            return false;
        };
        let list = el.class_list();
        let result = match force {
            Some(force) => list.toggle_with_force(class, force),
            None => list.toggle(class),
        };
        result.unwrap_or_else(|err| {
            warn!(%element, class, error = %describe_js_error(&err), "failed to toggle class");
            list.contains(class)
        })
    }

    fn set_style(&self, element: &ElementRef, property: &str, value: &str) {
        let Some(el) = resolve(element).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
            return;
        };
        let style = el.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            warn!(%element, property, error = %describe_js_error(&err), "failed to set style");
        }
    }

    fn set_text(&self, element: &ElementRef, text: &str) {
        if let Some(el) = resolve(element) {
            el.set_text_content(Some(text));
        }
    }

    fn set_disabled(&self, element: &ElementRef, disabled: bool) {
        let Some(el) = resolve(element) else {
            return;
        };
        if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return;
        }
        let result = if disabled {
            el.set_attribute("disabled", "")
        } else {
            el.remove_attribute("disabled")
        };
        if let Err(err) = result {
            warn!(%element, error = %describe_js_error(&err), "failed to toggle disabled");
        }
    }

    fn scroll_into_view(&self, element: &ElementRef) -> bool {
        let Some(el) = resolve(element) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
