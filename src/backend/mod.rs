//! Session state, routing table and the navigation guard.

pub mod guard;
pub mod session;
pub mod utils;
