//! Custom utilities.

pub mod error;
pub mod logging;
