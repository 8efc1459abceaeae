//! Dependency assembly
//!
//! Builds the browser adapters and hands them to the controllers. No
//! behaviour lives here.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use tracing::{info, warn};

use lp_app::{ExitIntentController, PageDeps, PageFeatures, PageInteractionController};
use lp_core::ports::KeyValueStorePort;
use lp_core::PageConfig;
use lp_infra::{resolve_endpoint, InMemoryKeyValueStore, ReqwestOnboardingLinkClient};
use lp_web::{LocalStorageStore, WebDom, WebTimer, WebWindow, WindowUserContext};

/// Both page components, wired and ready to be started.
pub struct PageRuntime {
    exit_intent: Arc<ExitIntentController>,
    page: Arc<PageInteractionController>,
}

/// Outcome of [`PageRuntime::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartedComponents {
    pub exit_intent: bool,
    pub page: PageFeatures,
}

impl PageRuntime {
    pub fn exit_intent(&self) -> &Arc<ExitIntentController> {
        &self.exit_intent
    }

    pub fn page(&self) -> &Arc<PageInteractionController> {
        &self.page
    }

    /// Start both components. They share no state, so one being absent from
    /// the page never affects the other.
    pub fn initialize(&self) -> StartedComponents {
        StartedComponents {
            exit_intent: self.exit_intent.start(),
            page: self.page.initialize(),
        }
    }
}

pub fn wire(config: &PageConfig, deps: PageDeps) -> PageRuntime {
    let exit_intent = Arc::new(ExitIntentController::new(
        config.exit_intent.clone(),
        deps.dom.clone(),
        deps.store.clone(),
        deps.timer.clone(),
    ));
    let page = Arc::new(PageInteractionController::new(config, &deps));
    PageRuntime { exit_intent, page }
}

fn page_store() -> Arc<dyn KeyValueStorePort> {
    if LocalStorageStore::is_available() {
        Arc::new(LocalStorageStore::new())
    } else {
        warn!("localStorage unavailable, exit popup suppression lasts for this page only");
        Arc::new(InMemoryKeyValueStore::new())
    }
}

/// Adapters over the live browser globals.
pub fn web_deps(config: &PageConfig) -> anyhow::Result<PageDeps> {
    let window = web_sys_window()?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow!("page origin is not readable"))?;
    let endpoint = resolve_endpoint(&origin, &config.onboarding.endpoint)
        .context("invalid onboarding endpoint")?;
    info!(%endpoint, "onboarding endpoint resolved");

    Ok(PageDeps {
        dom: Arc::new(WebDom::new()),
        window: Arc::new(WebWindow::new()),
        user_context: Arc::new(WindowUserContext::new()),
        store: page_store(),
        timer: Arc::new(WebTimer::new()),
        onboarding_link: Arc::new(ReqwestOnboardingLinkClient::new(endpoint)),
    })
}

fn web_sys_window() -> anyhow::Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global window, not running in a browser"))
}
