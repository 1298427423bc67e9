//! Application root.

pub mod main;

pub use main::App;
