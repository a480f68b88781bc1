//! Thin JSON helpers over window.localStorage.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, not persisting {key}");
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => {
            if storage.set_item(key, &json).is_err() {
                log::warn!("failed to write {key} to localStorage");
            }
        }
        Err(e) => log::warn!("failed to serialize {key}: {e}"),
    }
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) {
    if let Some(storage) = local_storage() {
        storage.remove_item(key).ok();
    }
}
