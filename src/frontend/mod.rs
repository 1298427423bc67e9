//! Frontend of the admin panel.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
