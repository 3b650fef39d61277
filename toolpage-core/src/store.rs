//! Preference slot storage
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

/// Key/value storage for the persisted preference.
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Read a slot
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be reached.
    fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Overwrite a slot
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
}

/// In-memory store shared between clones, used by headless runs and tests.
///
/// Marking it unavailable makes every call fail, mirroring a browser with
/// storage disabled.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<BTreeMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryStore {
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.set_available(false);
        store
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.set(!available);
    }

    pub fn clear(&self) {
        self.slots.borrow_mut().clear();
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    type Error = StoreError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.unavailable.get() {
            return Err(StoreError::Unavailable);
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.unavailable.get() {
            return Err(StoreError::Unavailable);
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
