//! Light navigation header.
//!
//! Renders the logo and link groups twice: once as a desktop row and once
//! inside a mobile container with a slide-in panel and a toggle button. The
//! collapse breakpoint's style bundle decides which of the two is visible.

use cu_coders_core::{BreakpointKey, HeaderConfig, HeaderProps, LogoLink, NavLinkGroup};
use leptos::prelude::*;

use crate::components::icons::ToggleGlyph;
use crate::components::nav_links::{Logo, NavLinks};
use crate::components::nav_toggle::{panel_style, use_nav_toggle};

/// Join a base class with a breakpoint fragment.
pub fn region_class(base: &str, fragment: &str) -> String {
    format!("{base} {fragment}")
}

fn render_groups(groups: Vec<NavLinkGroup>) -> impl IntoView {
    groups
        .into_iter()
        .map(|group| view! { <NavLinks group=group/> })
        .collect_view()
}

/// Site header with responsive desktop and mobile navigation.
///
/// Pass one link group for a two column header (logo | links) or two for a
/// three column one (logo | center | right). Without `links`, the site's
/// default pages are shown with a Login or Logout entry depending on
/// `is_logged_in`.
#[component]

pub fn LightHeader(
    /// Accepted for parity with the rounded header variant; has no effect.
    #[prop(optional)]
    rounded_header_button: bool,
    /// Brand link override.
    #[prop(optional)]
    logo_link: Option<LogoLink>,
    /// Link groups override, one column each.
    #[prop(optional)]
    links: Option<Vec<NavLinkGroup>>,
    /// Class for the `<header>` element. Defaults to `header-light`.
    #[prop(optional, into)]
    class_name: Option<String>,
    /// Screen at which the header collapses. Defaults to `mn`.
    #[prop(optional)]
    collapse_breakpoint: Option<BreakpointKey>,
    /// Whether the visitor is logged in.
    #[prop(optional)]
    is_logged_in: bool,
) -> impl IntoView {
    let config = use_context::<HeaderConfig>().unwrap_or_default();
    let header = HeaderProps {
        rounded_header_button,
        logo_link,
        links,
        class_name,
        collapse_breakpoint,
        is_logged_in,
    }
    .resolve_with(&config);

    let toggle = use_nav_toggle();
    let styles = header.styles;
    let columns = header.column_count().to_string();

    view! {
        <header class=region_class("site-header", &header.class_name)>
            <nav
                class=region_class("desktop-nav-links", styles.desktop_nav_links)
                data-columns=columns
            >
                <Logo logo=header.logo_link.clone()/>
                {render_groups(header.links.clone())}
            </nav>

            <nav class=region_class("mobile-nav-links-container", styles.mobile_nav_links_container)>
                <Logo logo=header.logo_link/>
                <div
                    class=region_class("mobile-nav-links", styles.mobile_nav_links)
                    style=move || panel_style(toggle.animation())
                >
                    {render_groups(header.links)}
                </div>
                <button
                    class=move || {
                        format!("nav-toggle {} {}", styles.mobile_nav_links, toggle.state_class())
                    }
                    on:click=move |_| toggle.toggle()
                    aria-label="Toggle menu"
                    aria-expanded=move || toggle.is_open().to_string()
                >
                    {move || view! { <ToggleGlyph icon=toggle.icon()/> }}
                </button>
            </nav>
        </header>
    }
}
