//! Collapse breakpoints and their precomputed style bundles.
//!
//! The header switches from the desktop link row to the togglable mobile
//! panel at one of a fixed set of screens. Each screen maps to a bundle of
//! utility classes; the theme emits the media queries behind those classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Screen at which the header collapses into the mobile menu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointKey {
    /// Small screens.
    Sm,
    /// Medium screens.
    Md,
    /// Large screens.
    Lg,
    /// Site-specific "mn" screen.
    #[default]
    Mn,
    /// Extra large screens.
    Xl,
}

impl BreakpointKey {
    /// All keys, in table order.
    pub const ALL: [Self; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Mn, Self::Xl];

    /// The key as it appears in props and configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Mn => "mn",
            Self::Xl => "xl",
        }
    }

    /// Look up the style bundle for this key.
    pub const fn style_bundle(self) -> StyleBundle {
        match self {
            Self::Sm => SM_BUNDLE,
            Self::Md => MD_BUNDLE,
            Self::Lg => LG_BUNDLE,
            Self::Mn => MN_BUNDLE,
            // xl has always collapsed at lg.
            Self::Xl => LG_BUNDLE,
        }
    }
}

impl fmt::Display for BreakpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakpointKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownBreakpoint(s.to_string()))
    }
}

/// Style fragments applied to the header regions for one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBundle {
    /// Screen prefix every fragment refers to.
    pub screen: &'static str,
    /// Hides the mobile overlay panel at and above the screen.
    pub mobile_nav_links: &'static str,
    /// Shows the desktop link row at and above the screen.
    pub desktop_nav_links: &'static str,
    /// Hides the mobile container at and above the screen.
    pub mobile_nav_links_container: &'static str,
}

impl StyleBundle {
    /// Class that hides the mobile overlay at and above the screen.
    pub const fn mobile_hidden(&self) -> &'static str {
        self.mobile_nav_links
    }

    /// Class that shows the desktop link row at and above the screen.
    pub const fn desktop_visible(&self) -> &'static str {
        self.desktop_nav_links
    }

    /// Fragments in render order: overlay, desktop row, mobile container.
    pub const fn fragments(&self) -> [&'static str; 3] {
        [
            self.mobile_nav_links,
            self.desktop_nav_links,
            self.mobile_nav_links_container,
        ]
    }
}

const SM_BUNDLE: StyleBundle = StyleBundle {
    screen: "sm",
    mobile_nav_links: "sm:hidden",
    desktop_nav_links: "sm:flex",
    mobile_nav_links_container: "sm:hidden",
};

const MD_BUNDLE: StyleBundle = StyleBundle {
    screen: "md",
    mobile_nav_links: "md:hidden",
    desktop_nav_links: "md:flex",
    mobile_nav_links_container: "md:hidden",
};

const LG_BUNDLE: StyleBundle = StyleBundle {
    screen: "lg",
    mobile_nav_links: "lg:hidden",
    desktop_nav_links: "lg:flex",
    mobile_nav_links_container: "lg:hidden",
};

const MN_BUNDLE: StyleBundle = StyleBundle {
    screen: "mn",
    mobile_nav_links: "mn:hidden",
    desktop_nav_links: "mn:flex",
    mobile_nav_links_container: "mn:hidden",
};

/// Resolve a raw breakpoint key (as passed through props) to its bundle.
pub fn resolve_style_bundle(key: &str) -> Result<StyleBundle> {
    let key: BreakpointKey = key.parse()?;
    tracing::debug!(breakpoint = %key, "Resolved collapse breakpoint");
    Ok(key.style_bundle())
}
