use js_sys::Reflect;
use wasm_bindgen::JsValue;

use lp_core::ports::UserContextPort;

/// Global the hosting page assigns for the signed-in user.
pub const CURRENT_USER_GLOBAL: &str = "currentUserId";

/// Reads `window.currentUserId`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowUserContext;

impl WindowUserContext {
    pub fn new() -> Self {
        Self
    }
}

impl UserContextPort for WindowUserContext {
    fn current_user_id(&self) -> Option<String> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str(CURRENT_USER_GLOBAL)).ok()?;
        user_id_from_js(&value)
    }
}

/// Falsy values (`undefined`, `null`, `""`, `0`) count as "no user".
fn user_id_from_js(value: &JsValue) -> Option<String> {
    if !value.is_truthy() {
        return None;
    }
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
}
