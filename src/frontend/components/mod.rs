//! Shared UI components.

pub mod layout;
