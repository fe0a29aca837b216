//! Navigation link model and the site's default link set.

use serde::{Deserialize, Serialize};

/// What happens when a link is activated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkAction {
    /// Follow the link's `href`.
    #[default]
    Navigate,
    /// Call the logout endpoint instead of following a link.
    Logout,
}

/// Visual weight of a link.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkVariant {
    /// Underlined text link.
    #[default]
    Plain,
    /// Filled call-to-action button.
    Primary,
}

/// A single entry in a link group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    /// Target URL. Empty for action links.
    #[serde(default)]
    pub href: String,
    /// Visible text.
    pub label: String,
    /// Click behavior.
    #[serde(default)]
    pub action: LinkAction,
    /// Visual weight.
    #[serde(default)]
    pub variant: LinkVariant,
}

impl NavLink {
    /// Plain link to `href`.
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            action: LinkAction::Navigate,
            variant: LinkVariant::Plain,
        }
    }

    /// Link that logs the user out when clicked.
    pub fn logout(label: impl Into<String>) -> Self {
        Self {
            href: String::new(),
            label: label.into(),
            action: LinkAction::Logout,
            variant: LinkVariant::Plain,
        }
    }

    /// Render with the primary call-to-action style.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.variant = LinkVariant::Primary;
        self
    }
}

/// One column of links in the header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLinkGroup {
    /// Links in display order.
    pub links: Vec<NavLink>,
}

impl NavLinkGroup {
    /// Group from an ordered list of links.
    pub const fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    /// Whether any link in this group carries `label`.
    pub fn contains_label(&self, label: &str) -> bool {
        self.links.iter().any(|link| link.label == label)
    }
}

/// Brand link shown on the left of the header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoLink {
    /// Target URL.
    pub href: String,
    /// Logo image URL.
    pub image_src: String,
    /// Alternative text for the logo image.
    pub image_alt: String,
    /// Text shown next to the image.
    pub label: String,
}

impl Default for LogoLink {
    fn default() -> Self {
        Self {
            href: "https://cuchapter.tech".to_string(),
            image_src: "/images/logo.png".to_string(),
            image_alt: "CU-Coders".to_string(),
            label: "CU-Coders".to_string(),
        }
    }
}

/// Label of the sign-in link shown to anonymous visitors.
pub const LOGIN_LABEL: &str = "Login";

/// Label of the sign-out action shown to logged in visitors.
pub const LOGOUT_LABEL: &str = "Logout";

const DEFAULT_PAGES: [(&str, &str); 9] = [
    ("/Home", "Home"),
    ("/About", "About"),
    ("/team", "Team"),
    ("/events", "Events"),
    ("/projects", "Projects"),
    ("/resources", "Resources"),
    ("/careers", "Careers"),
    ("/member", "Membership"),
    ("/contact", "Contact Us"),
];

/// The site's standard single-column link set.
///
/// Ends with `Login` for anonymous visitors and a `Logout` action otherwise.
pub fn default_links(is_logged_in: bool) -> Vec<NavLinkGroup> {
    let mut links: Vec<NavLink> = DEFAULT_PAGES
        .iter()
        .map(|(href, label)| NavLink::new(*href, *label))
        .collect();

    links.push(if is_logged_in {
        NavLink::logout(LOGOUT_LABEL)
    } else {
        NavLink::new("/login", LOGIN_LABEL)
    });

    vec![NavLinkGroup::new(links)]
}
