//! Link components shared by the desktop row and the mobile panel.

use cu_coders_core::{
    HeaderConfig, LinkAction, LinkVariant, LogoLink, NavLink, NavLinkGroup, logout,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::{FetchLogoutClient, WindowBrowser};

/// Class list for a link of the given variant.
pub const fn link_class(variant: LinkVariant) -> &'static str {
    match variant {
        LinkVariant::Plain => "nav-link",
        LinkVariant::Primary => "nav-link primary",
    }
}

/// One column of links.
#[component]

pub fn NavLinks(
    /// The links to render, in order.
    group: NavLinkGroup,
) -> impl IntoView {
    view! {
        <div class="nav-links">
            {group
                .links
                .into_iter()
                .map(|link| view! { <NavLinkItem link=link/> })
                .collect_view()}
        </div>
    }
}

/// A single link. Logout links call the logout endpoint instead of navigating.
#[component]

pub fn NavLinkItem(
    /// Link data.
    link: NavLink,
) -> impl IntoView {
    let class = link_class(link.variant);

    match link.action {
        LinkAction::Navigate => view! {
            <a class=class href=link.href>{link.label}</a>
        }
        .into_any(),
        LinkAction::Logout => {
            let config = use_context::<HeaderConfig>().unwrap_or_default();
            let handle_click = move |_| {
                let config = config.clone();
                spawn_local(async move {
                    logout(&FetchLogoutClient, &WindowBrowser, &config).await;
                });
            };

            view! {
                <a class=class style="cursor: pointer" role="button" on:click=handle_click>
                    {link.label}
                </a>
            }
            .into_any()
        }
    }
}

/// Brand link with logo image.
#[component]

pub fn Logo(
    /// Brand link data.
    logo: LogoLink,
) -> impl IntoView {
    view! {
        <a class="nav-link logo-link" href=logo.href>
            <img src=logo.image_src alt=logo.image_alt/>
            {logo.label}
        </a>
    }
}
