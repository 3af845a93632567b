//! Persistence helpers for user-facing settings.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;

/// Persisted on/off state for a settings toggle; missing or unreadable values read as off.
pub(crate) fn load_setting(key: &str) -> bool {
    LocalStorage::get::<bool>(key).unwrap_or(false)
}

pub(crate) fn persist_setting(key: &str, value: bool) {
    set_storage(key, value);
}

fn set_storage<T: Serialize>(key: &str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
