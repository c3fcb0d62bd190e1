use portfolio_core::{Error, PreferenceStore, Result};
use wasm_bindgen::JsValue;

/// `window.localStorage`. Private browsing modes may refuse access, in which
/// case reads come back empty and writes fail.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let Some(storage) = &self.storage else {
            return Err(Error::Storage("localStorage unavailable".to_string()));
        };
        storage.set_item(key, value).map_err(storage_error)
    }
}

fn storage_error(value: JsValue) -> Error {
    Error::Storage(format!("{value:?}"))
}
