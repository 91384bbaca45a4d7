//! Page-level UI state (theme, active section, modal visibility, pointer glow,
//! click ripples).
//!
//! DESIGN
//! ======
//! Held in a single `RwSignal<UiState>` provided via context at the app root.
//! Components read it and push changes through the methods below rather than
//! keeping their own ambient copies.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::content::SectionId;

/// Color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    /// Glyph for the toggle button (shows the mode you would switch to).
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "☾",
        }
    }
}

/// An expanding circle spawned where the user clicked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

/// UI state shared across the page.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: ThemeMode,
    pub active_section: SectionId,
    pub chat_open: bool,
    pub pointer: (f64, f64),
    pub ripples: Vec<Ripple>,
    next_ripple_id: u64,
}

impl UiState {
    /// Record a click ripple at viewport coordinates and return its id.
    pub fn spawn_ripple(&mut self, x: f64, y: f64) -> u64 {
        self.next_ripple_id += 1;
        let id = self.next_ripple_id;
        self.ripples.push(Ripple { id, x, y });
        id
    }

    /// Drop the ripple with `id` once its animation has finished.
    pub fn retire_ripple(&mut self, id: u64) {
        self.ripples.retain(|ripple| ripple.id != id);
    }

    /// Update the active section; returns whether it changed.
    pub fn set_active_section(&mut self, section: SectionId) -> bool {
        if self.active_section == section {
            return false;
        }
        self.active_section = section;
        true
    }
}
