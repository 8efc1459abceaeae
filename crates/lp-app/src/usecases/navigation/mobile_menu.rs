use std::sync::Arc;

use tracing::{debug, info, warn};

use lp_core::config::NavigationConfig;
use lp_core::ports::DomPort;
use lp_core::{ElementRef, MenuState};

/// Hamburger-driven mobile menu.
///
/// The open state is mirrored onto three class lists: the menu, the toggle
/// button and the body.
pub struct MobileMenu {
    config: NavigationConfig,
    dom: Arc<dyn DomPort>,
}

impl MobileMenu {
    pub fn new(config: NavigationConfig, dom: Arc<dyn DomPort>) -> Self {
        Self { config, dom }
    }

    pub fn button(&self) -> ElementRef {
        ElementRef::id(&self.config.hamburger_id)
    }

    pub fn menu(&self) -> ElementRef {
        ElementRef::id(&self.config.menu_id)
    }

    /// Whether the page has both the toggle button and the menu.
    pub fn initialize(&self) -> bool {
        if !self.dom.exists(&self.button()) || !self.dom.exists(&self.menu()) {
            warn!(
                button = %self.button(),
                menu = %self.menu(),
                "hamburger or mobile menu not found"
            );
            return false;
        }
        true
    }

    pub fn state(&self) -> MenuState {
        MenuState::from_open(self.dom.has_class(&self.menu(), &self.config.menu_open_class))
    }

    pub fn toggle(&self) -> MenuState {
        let open = self
            .dom
            .toggle_class(&self.menu(), &self.config.menu_open_class, None);
        self.dom
            .toggle_class(&self.button(), &self.config.button_active_class, Some(open));
        self.dom
            .toggle_class(&ElementRef::Body, &self.config.body_lock_class, Some(open));

        let state = MenuState::from_open(open);
        info!(%state, "menu is now {state}");
        state
    }

    /// Close the menu after one of its links was followed.
    pub fn close(&self) {
        self.dom
            .remove_class(&self.menu(), &self.config.menu_open_class);
        self.dom
            .remove_class(&self.button(), &self.config.button_active_class);
        self.dom
            .remove_class(&ElementRef::Body, &self.config.body_lock_class);
        debug!("menu closed by link");
    }
}
