//! Startup: logging, dependency assembly and listener installation.

pub mod tracing;
pub mod wiring;

use ::tracing::{error, info};

use lp_core::PageConfig;
use lp_web::listeners;

use wiring::{PageRuntime, StartedComponents};

/// Wire the browser adapters and start both components once the DOM is
/// parsed.
pub fn run(config: PageConfig) -> anyhow::Result<()> {
    let deps = wiring::web_deps(&config)?;
    let runtime = wiring::wire(&config, deps);
    listeners::on_dom_ready(move || {
        let started = runtime.initialize();
        if let Err(err) = install_listeners(&runtime, started) {
            error!(error = %format!("{err:#}"), "failed to install page listeners");
        }
    })
}

fn install_listeners(runtime: &PageRuntime, started: StartedComponents) -> anyhow::Result<()> {
    if started.exit_intent {
        listeners::install_exit_intent(runtime.exit_intent())?;
    }
    listeners::install_page_interactions(runtime.page(), started.page)?;
    info!(
        exit_intent = started.exit_intent,
        mobile_menu = started.page.mobile_menu,
        onboarding = started.page.onboarding,
        "page listeners installed"
    );
    Ok(())
}
