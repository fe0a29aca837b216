//! Header options and their resolution into a concrete layout.
//!
//! Every prop is optional. [`HeaderProps::resolve`] fills in the defaults in
//! one place so rendering code only ever sees a [`ResolvedHeader`].
//!
//! The header is multi column: the logo always takes the first column and
//! each link group takes one more. One group gives a two column header, two
//! groups give logo / center / right.

use crate::breakpoint::{BreakpointKey, StyleBundle};
use crate::config::HeaderConfig;
use crate::error::Result;
use crate::links::{LogoLink, NavLinkGroup, default_links};

/// Class applied to the header when the caller does not pass one.
pub const DEFAULT_CLASS_NAME: &str = "header-light";

/// Caller-supplied header options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderProps {
    /// Accepted for compatibility with other header variants; has no effect.
    pub rounded_header_button: bool,
    /// Brand link override.
    pub logo_link: Option<LogoLink>,
    /// Link groups override.
    pub links: Option<Vec<NavLinkGroup>>,
    /// Extra class for the `<header>` element.
    pub class_name: Option<String>,
    /// Screen at which the header collapses.
    pub collapse_breakpoint: Option<BreakpointKey>,
    /// Whether the visitor is logged in.
    pub is_logged_in: bool,
}

impl HeaderProps {
    /// Set the collapse breakpoint from its string key.
    pub fn with_breakpoint_class(mut self, key: &str) -> Result<Self> {
        self.collapse_breakpoint = Some(key.parse()?);
        Ok(self)
    }

    /// Fill in every missing option from the built-in defaults.
    pub fn resolve(self) -> ResolvedHeader {
        self.resolve_with(&HeaderConfig::default())
    }

    /// Fill in every missing option, taking defaults from `config`.
    pub fn resolve_with(self, config: &HeaderConfig) -> ResolvedHeader {
        let collapse_breakpoint = self
            .collapse_breakpoint
            .unwrap_or(config.collapse_breakpoint);
        let links = self
            .links
            .unwrap_or_else(|| default_links(self.is_logged_in));

        ResolvedHeader {
            logo_link: self.logo_link.unwrap_or_else(|| config.logo.clone()),
            links,
            class_name: self
                .class_name
                .filter(|class| !class.is_empty())
                .unwrap_or_else(|| config.class_name.clone()),
            collapse_breakpoint,
            styles: collapse_breakpoint.style_bundle(),
            is_logged_in: self.is_logged_in,
        }
    }
}

/// Header options with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeader {
    /// Brand link.
    pub logo_link: LogoLink,
    /// Link groups, one column each.
    pub links: Vec<NavLinkGroup>,
    /// Class for the `<header>` element.
    pub class_name: String,
    /// Screen at which the header collapses.
    pub collapse_breakpoint: BreakpointKey,
    /// Style bundle for `collapse_breakpoint`.
    pub styles: StyleBundle,
    /// Whether the visitor is logged in.
    pub is_logged_in: bool,
}

impl ResolvedHeader {
    /// Number of columns in the desktop layout: the logo plus one per group.
    pub fn column_count(&self) -> usize {
        1 + self.links.len()
    }
}
