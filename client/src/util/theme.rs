//! Theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser environment;
//! SSR and native test builds no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::ThemeMode;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "portfolio_theme";

/// Read the theme preference.
///
/// Returns the stored mode when present and valid, otherwise `Dark`.
pub fn read_preference() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        preference_from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        preference_from_stored(None)
    }
}

/// Map a stored `localStorage` value to a mode; anything unrecognized is `Dark`.
pub fn preference_from_stored(stored: Option<&str>) -> ThemeMode {
    stored.and_then(ThemeMode::parse).unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Toggle the theme and persist the new preference to localStorage.
pub fn toggle(current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_str());
            }
        }
    }
    next
}
