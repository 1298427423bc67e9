//! Pages rendered by the router.

pub mod comment;
pub mod login;
pub mod not_found;
pub mod user;
