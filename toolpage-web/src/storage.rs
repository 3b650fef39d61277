use toolpage_core::PreferenceStore;
use web_sys::Storage;

use crate::dom;
use crate::error::WebError;

/// Preference slot backed by `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalPreferenceStore {
    storage: Storage,
}

impl LocalPreferenceStore {
    /// # Errors
    ///
    /// Returns an error when the browser has storage disabled or blocked.
    pub fn open() -> Result<Self, WebError> {
        dom::local_storage().map(|storage| Self { storage })
    }

    /// # Errors
    ///
    /// Returns an error if the slot cannot be removed.
    pub fn remove(&self, key: &str) -> Result<(), WebError> {
        self.storage
            .remove_item(key)
            .map_err(WebError::js("localStorage.removeItem"))
    }
}

impl PreferenceStore for LocalPreferenceStore {
    type Error = WebError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.storage
            .get_item(key)
            .map_err(WebError::js("localStorage.getItem"))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.storage
            .set_item(key, value)
            .map_err(WebError::js("localStorage.setItem"))
    }
}
