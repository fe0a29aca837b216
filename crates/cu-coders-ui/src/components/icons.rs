//! Toggle button glyphs.

use cu_coders_core::ToggleIcon;
use leptos::prelude::*;

/// Feather "menu" glyph.
pub const MENU: &[&str] = &["M3 12h18", "M3 6h18", "M3 18h18"];

/// Feather "x" glyph.
pub const CLOSE: &[&str] = &["M18 6 6 18", "M6 6l12 12"];

/// Stroke paths for an icon.
pub const fn paths(icon: ToggleIcon) -> &'static [&'static str] {
    match icon {
        ToggleIcon::Menu => MENU,
        ToggleIcon::Close => CLOSE,
    }
}

/// Stroked 24x24 icon.
#[component]

pub fn ToggleGlyph(
    /// Which glyph to draw.
    icon: ToggleIcon,
) -> impl IntoView {
    view! {
        <svg
            class="nav-toggle-icon"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {paths(icon).iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}
