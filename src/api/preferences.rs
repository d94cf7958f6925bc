//! Tuning preference persistence
//!
//! One key in browser-local storage remembers the selected tuning across
//! sessions. Persistence is best-effort: missing storage (private browsing,
//! blocked access) and bad stored values all degrade to the default tuning,
//! never to an error.

use crate::models::Tuning;
use crate::wasm_warn;

/// Storage key holding the tuning id.
pub const TUNING_STORAGE_KEY: &str = "fretboard-tuning";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Stored tuning preference, if a valid one exists.
pub fn load_tuning() -> Option<Tuning> {
    let value = storage()?.get_item(TUNING_STORAGE_KEY).ok()??;
    value.parse().ok()
}

/// Persist the tuning id. Failures are logged and swallowed.
pub fn store_tuning(tuning: Tuning) {
    match storage() {
        Some(storage) => {
            if storage.set_item(TUNING_STORAGE_KEY, tuning.as_str()).is_err() {
                wasm_warn!("Could not persist tuning preference");
            }
        }
        None => wasm_warn!("Local storage unavailable; tuning preference not persisted"),
    }
}
