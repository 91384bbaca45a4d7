//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns browser subscriptions and orchestration, and delegates
//! rendering details to `components`.

pub mod portfolio;
