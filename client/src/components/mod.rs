//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and section content while reading/writing
//! shared state from Leptos context providers.

pub mod agent_chat_modal;
pub mod animated_text;
pub mod backdrop;
pub mod navbar;
pub mod sections;
