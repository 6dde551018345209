//! Dioxus components shared by the Harvest Hub pages.

pub mod components;

pub use components::*;
