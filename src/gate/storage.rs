use log::warn;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("corrupt record: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Access(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// The slice of the browser storage API the gate needs.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, which may be missing (private mode, disabled
/// storage, sandboxed frames).
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = window().and_then(|w| w.local_storage().ok()).flatten();
        if storage.is_none() {
            warn!("Local storage is not available");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.storage()?.get_item(key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.storage()?.set_item(key, value)?)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Ok(self.storage()?.remove_item(key)?)
    }
}
