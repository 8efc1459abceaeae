//! DOM addressing and event outcome types shared by every controller.

use std::fmt::{Display, Formatter};

/// Reference to an element the controllers operate on.
///
/// Adapters resolve the reference on every call, so a reference to an element
/// that does not exist is valid and simply resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementRef {
    /// Element looked up by its `id` attribute.
    Id(String),
    /// First element matching a CSS selector.
    Selector(String),
    /// The document body.
    Body,
}

impl ElementRef {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }
}

impl Display for ElementRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementRef::Id(id) => write!(f, "#{id}"),
            ElementRef::Selector(selector) => write!(f, "{selector}"),
            ElementRef::Body => write!(f, "body"),
        }
    }
}

/// What the event adapter must do with the native event after a controller
/// handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// Let the browser run its default action.
    Proceed,
    /// `preventDefault()`.
    PreventDefault,
    /// `preventDefault()` and `stopPropagation()`.
    Cancel,
}

impl EventDisposition {
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::PreventDefault | Self::Cancel)
    }

    pub fn stops_propagation(self) -> bool {
        matches!(self, Self::Cancel)
    }
}

/// Extract the element id a same-page anchor `href` points at.
///
/// Returns `None` for links that are not fragment links and for the bare `#`
/// link, which matches no element.
pub fn fragment_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}
