//! Tab and location adapter.
//!
//! Tabs opened by the page are kept in a thread-local registry so the port
//! can hand out plain [`TabHandle`]s.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use anyhow::anyhow;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::Window;

use lp_core::ports::{BrowserWindowPort, TabHandle};

use crate::describe_js_error;

const NEW_TAB_TARGET: &str = "_blank";

thread_local! {
    static TABS: RefCell<HashMap<u32, Window>> = RefCell::new(HashMap::new());
    static NEXT_TAB_ID: Cell<u32> = const { Cell::new(0) };
}

fn register(tab: Window) -> TabHandle {
    let id = NEXT_TAB_ID.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    });
    TABS.with(|tabs| tabs.borrow_mut().insert(id, tab));
    TabHandle::new(id)
}

fn lookup(handle: TabHandle) -> Option<Window> {
    TABS.with(|tabs| tabs.borrow().get(&handle.id()).cloned())
}

fn forget(handle: TabHandle) -> Option<Window> {
    TABS.with(|tabs| tabs.borrow_mut().remove(&handle.id()))
}

/// [`BrowserWindowPort`] over the global `window`.
///
/// Tabs are opened without the `noopener` feature, which would make
/// `window.open` return `null`; the opener link is severed by hand instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebWindow;

impl WebWindow {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, url: &str) -> Option<TabHandle> {
        let window = web_sys::window()?;
        let tab = match window.open_with_url_and_target(url, NEW_TAB_TARGET) {
            Ok(Some(tab)) => tab,
            Ok(None) => {
                debug!("window.open returned no tab, popup blocked");
                return None;
            }
            Err(err) => {
                warn!(error = %describe_js_error(&err), "window.open failed");
                return None;
            }
        };
        if let Err(err) = tab.set_opener(&JsValue::NULL) {
            debug!(error = %describe_js_error(&err), "could not clear opener of new tab");
        }
        Some(register(tab))
    }
}

impl BrowserWindowPort for WebWindow {
    fn open_blank_tab(&self) -> Option<TabHandle> {
        self.open("")
    }

    fn open_tab(&self, url: &str) -> Option<TabHandle> {
        self.open(url)
    }

    fn navigate_tab(&self, tab: TabHandle, url: &str) -> bool {
        let Some(window) = lookup(tab) else {
            return false;
        };
        if window.closed().unwrap_or(true) {
            forget(tab);
            return false;
        }
        match window.location().set_href(url) {
            Ok(()) => true,
            Err(err) => {
                warn!(%tab, error = %describe_js_error(&err), "failed to navigate tab");
                false
            }
        }
    }

    fn close_tab(&self, tab: TabHandle) {
        if let Some(window) = forget(tab) {
            if let Err(err) = window.close() {
                debug!(%tab, error = %describe_js_error(&err), "failed to close tab");
            }
        }
    }

    fn redirect(&self, path: &str) -> anyhow::Result<()> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
        window
            .location()
            .set_href(path)
            .map_err(|err| anyhow!("failed to navigate to {path}: {}", describe_js_error(&err)))
    }
}
