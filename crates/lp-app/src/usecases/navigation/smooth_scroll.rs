use std::sync::Arc;

use tracing::debug;

use lp_core::dom::fragment_target;
use lp_core::ports::DomPort;
use lp_core::{ElementRef, EventDisposition};

/// Smooth scrolling for same-page anchor links.
pub struct SmoothScroll {
    dom: Arc<dyn DomPort>,
}

impl SmoothScroll {
    pub fn new(dom: Arc<dyn DomPort>) -> Self {
        Self { dom }
    }

    /// Handle a click on a link with the given `href`.
    ///
    /// Fragment links never perform the native jump, even when their target
    /// does not exist.
    pub fn on_anchor_click(&self, href: &str) -> EventDisposition {
        if !href.starts_with('#') {
            return EventDisposition::Proceed;
        }

        match fragment_target(href) {
            Some(id) => {
                if !self.dom.scroll_into_view(&ElementRef::id(id)) {
                    debug!(href, "anchor target not found");
                }
            }
            None => debug!(href, "empty anchor fragment"),
        }
        EventDisposition::PreventDefault
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeDom;

    #[test]
    fn scrolls_to_existing_target() {
        let dom = Arc::new(FakeDom::with_elements(&[ElementRef::id("pricing")]));
        let scroll = SmoothScroll::new(dom.clone());

        assert_eq!(scroll.on_anchor_click("#pricing"), EventDisposition::PreventDefault);
        assert_eq!(dom.scrolled(), vec![ElementRef::id("pricing")]);
    }

    #[test]
    fn missing_target_still_prevents_default() {
        let dom = Arc::new(FakeDom::new());
        let scroll = SmoothScroll::new(dom.clone());

        assert_eq!(scroll.on_anchor_click("#nowhere"), EventDisposition::PreventDefault);
        assert_eq!(scroll.on_anchor_click("#"), EventDisposition::PreventDefault);
        assert!(dom.scrolled().is_empty());
    }

    #[test]
    fn non_fragment_links_proceed() {
        let dom = Arc::new(FakeDom::new());
        let scroll = SmoothScroll::new(dom);

        assert_eq!(scroll.on_anchor_click("/pricing"), EventDisposition::Proceed);
    }
}
