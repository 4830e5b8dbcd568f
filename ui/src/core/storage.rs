//! Local persistence for the one setting the site keeps: the preferred
//! language.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::i18n::Lang;

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("local storage rejected write: {0}")]
    Rejected(String),
}

/// Minimal key-value store, mirroring the browser's `localStorage`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Outside the browser nothing is stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()?.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = Self::storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|err| StorageError::Rejected(format!("{err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process store used by tests and non-browser previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Saved language, or the primary one when nothing (valid) is stored.
pub fn load_language(store: &impl PreferenceStore, key: &str) -> Lang {
    store
        .get(key)
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or(Lang::PRIMARY)
}

pub fn save_language(
    store: &impl PreferenceStore,
    key: &str,
    lang: Lang,
) -> Result<(), StorageError> {
    store.set(key, lang.code())
}
