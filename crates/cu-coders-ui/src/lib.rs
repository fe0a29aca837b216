//! CU-Coders UI - Leptos-based site header.
//!
//! This crate provides the light navigation header: logo, desktop links, a
//! collapsible mobile menu and the login/logout action.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod browser;
pub mod components;
pub mod theme;

pub use app::App;
pub use components::LightHeader;
