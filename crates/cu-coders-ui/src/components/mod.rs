//! UI components for the CU-Coders header.

pub mod header;
pub mod icons;
pub mod nav_links;
pub mod nav_toggle;

pub use header::LightHeader;
pub use icons::ToggleGlyph;
pub use nav_links::{Logo, NavLinkItem, NavLinks};
pub use nav_toggle::{NavToggleHandle, use_nav_toggle};
