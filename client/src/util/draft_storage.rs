//! Browser `localStorage` helpers for form draft persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms keep half-typed input across reloads. These helpers centralize the
//! hydrate-only web-sys glue so pages only deal in typed drafts.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const DONATION_DRAFT_KEY: &str = "foodshare_donation_draft";

/// Load a JSON draft stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON draft under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        match serde_json::to_string(value) {
            Ok(raw) => {
                if storage.set_item(key, &raw).is_err() {
                    log::debug!("draft not persisted for {key}");
                }
            }
            Err(e) => log::warn!("draft serialization failed for {key}: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Drop the draft stored under `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.remove_item(key).is_err() {
                log::warn!("failed to remove draft {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
