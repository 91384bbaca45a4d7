//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` for page chrome, `chat` for the agent
//! conversation) so components depend on small focused models.

pub mod chat;
pub mod ui;
