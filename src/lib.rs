//! leadpage
//!
//! WebAssembly entry point for the marketing site scripts: the exit-intent
//! popup and the page interaction controller (mobile menu, smooth anchors,
//! form gating, payment onboarding button).

pub mod bootstrap;

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::*;

static STARTED: AtomicBool = AtomicBool::new(false);

/// Runs when the module is instantiated: panic hook and logging only.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(err) = bootstrap::tracing::init_tracing_subscriber() {
        console_fallback(&format!("leadpage: tracing disabled: {err:#}"));
    }
}

/// Wire both components with the built-in configuration.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    launch(lp_core::PageConfig::default())
}

/// Wire both components with a TOML override of the built-in configuration.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(toml: &str) -> Result<(), JsValue> {
    let config = lp_infra::config::parse_config(toml).map_err(to_js_error)?;
    launch(config)
}

fn launch(config: lp_core::PageConfig) -> Result<(), JsValue> {
    if STARTED.swap(true, Ordering::SeqCst) {
        tracing::warn!("leadpage already started, ignoring");
        return Ok(());
    }
    bootstrap::run(config).map_err(|err| {
        STARTED.store(false, Ordering::SeqCst);
        to_js_error(err)
    })
}

fn to_js_error(err: anyhow::Error) -> JsValue {
    JsError::new(&format!("{err:#}")).into()
}

// Before the subscriber exists the console is the only sink.
fn console_fallback(message: &str) {
    lp_web::ConsoleMethod::Warn.emit(message);
}
