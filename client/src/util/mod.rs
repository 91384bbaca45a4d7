//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure logic (scroll-spy, canned dialogue, text reveal) lives here alongside
//! the browser glue for theme persistence, so pages stay thin and the logic is
//! testable without a browser.

pub mod dialogue;
pub mod scroll_spy;
pub mod text_reveal;
pub mod theme;
