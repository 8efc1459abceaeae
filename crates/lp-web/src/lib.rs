//! leadpage browser layer
//!
//! Implements the `lp-core` ports on top of `web-sys` and forwards native DOM
//! events to the `lp-app` controllers.
//!
//! Adapters hold no JS handles: `web_sys` types are neither `Send` nor `Sync`,
//! so every call resolves `window`/`document` afresh.

pub mod console;
pub mod dom;
pub mod listeners;
pub mod storage;
pub mod timer;
pub mod user;
pub mod window;

pub use console::{ConsoleMakeWriter, ConsoleMethod};
pub use dom::WebDom;
pub use storage::LocalStorageStore;
pub use timer::WebTimer;
pub use user::WindowUserContext;
pub use window::WebWindow;

/// Render a JS exception for logs and `anyhow` errors.
pub(crate) fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
