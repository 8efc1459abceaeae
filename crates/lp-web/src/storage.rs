use web_sys::Storage;

use lp_core::ports::{KeyValueStoreError, KeyValueStorePort};

use crate::describe_js_error;

/// [`KeyValueStorePort`] over `window.localStorage`.
///
/// Access can throw (privacy modes, sandboxed frames); that surfaces as
/// [`KeyValueStoreError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    /// Whether `localStorage` can be reached at all on this page.
    pub fn is_available() -> bool {
        storage().is_ok()
    }
}

fn storage() -> Result<Storage, KeyValueStoreError> {
    let window = web_sys::window()
        .ok_or_else(|| KeyValueStoreError::Unavailable("no global window".to_string()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(KeyValueStoreError::Unavailable(
            "localStorage is not supported".to_string(),
        )),
        Err(err) => Err(KeyValueStoreError::Unavailable(describe_js_error(&err))),
    }
}

fn operation_error(err: wasm_bindgen::JsValue) -> KeyValueStoreError {
    KeyValueStoreError::Operation(describe_js_error(&err))
}

impl KeyValueStorePort for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        storage()?.get_item(key).map_err(operation_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        storage()?.set_item(key, value).map_err(operation_error)
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        storage()?.remove_item(key).map_err(operation_error)
    }
}
