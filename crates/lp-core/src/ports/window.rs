use std::fmt::{Display, Formatter};

/// Opaque handle to a browser tab opened by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabHandle(u32);

impl TabHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl Display for TabHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// Window-level navigation: tabs and the current location.
pub trait BrowserWindowPort: Send + Sync {
    /// Open a blank, unnamed tab. `None` when the browser refused (popup
    /// blocker).
    fn open_blank_tab(&self) -> Option<TabHandle>;

    /// Open a tab directly on `url`.
    fn open_tab(&self, url: &str) -> Option<TabHandle>;

    /// Point an opened tab at `url`. Returns `false` if the tab is gone.
    fn navigate_tab(&self, tab: TabHandle, url: &str) -> bool;

    /// Close an opened tab; no-op if it is already closed.
    fn close_tab(&self, tab: TabHandle);

    /// Navigate the current page.
    fn redirect(&self, path: &str) -> anyhow::Result<()>;
}
