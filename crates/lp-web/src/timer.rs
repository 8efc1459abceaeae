use std::time::Duration;

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use lp_core::ports::{TimerPort, TimerTask};

use crate::describe_js_error;

/// [`TimerPort`] over `window.setTimeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebTimer;

impl WebTimer {
    pub fn new() -> Self {
        Self
    }
}

/// `setTimeout` takes a signed 32-bit delay; longer delays fire immediately in
/// browsers, so they are clamped instead.
pub fn timeout_ms(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

impl TimerPort for WebTimer {
    fn schedule(&self, delay: Duration, task: TimerTask) {
        let Some(window) = web_sys::window() else {
            warn!("no global window, timer dropped");
            return;
        };
        let callback = Closure::once_into_js(move || task());
        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            timeout_ms(delay),
        ) {
            warn!(error = %describe_js_error(&err), "setTimeout failed");
        }
    }
}
