//! Frontend services shared through Dioxus context.

pub mod context;
pub mod navigation;
