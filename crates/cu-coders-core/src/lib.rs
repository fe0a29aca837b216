//! CU-Coders Header Core Library
//!
//! Platform-independent logic behind the site's light navigation header:
//! - Collapse breakpoints and the style bundle each one selects
//! - The mobile menu toggle and its slide animation
//! - The navigation link model and the default link set
//! - Resolution of optional header props into a concrete layout
//! - The logout flow, behind client and browser seams
//! - Header configuration
//!
//! # Error Handling
//!
//! Fallible operations return [`Result`], whose error type is the crate's
//! [`Error`] enum.
//!
//! ```rust
//! use cu_coders_core::{BreakpointKey, HeaderProps};
//!
//! let header = HeaderProps::default().resolve();
//! assert_eq!(header.collapse_breakpoint, BreakpointKey::Mn);
//! assert_eq!(header.column_count(), 2);
//! ```

pub mod breakpoint;
pub mod config;
pub mod error;
pub mod header;
pub mod links;
pub mod logout;
pub mod nav_toggle;

pub use breakpoint::{BreakpointKey, StyleBundle, resolve_style_bundle};
pub use config::{DEFAULT_LOGOUT_ENDPOINT, DEFAULT_REDIRECT, HeaderConfig};
pub use error::{Error, Result};
pub use header::{DEFAULT_CLASS_NAME, HeaderProps, ResolvedHeader};
pub use links::{
    LOGIN_LABEL, LOGOUT_LABEL, LinkAction, LinkVariant, LogoLink, NavLink, NavLinkGroup,
    default_links,
};
pub use logout::{
    Browser, FAILURE_MESSAGE, LogoutClient, LogoutOutcome, LogoutResponse, SUCCESS_MESSAGE,
    complete_logout, logout,
};
pub use nav_toggle::{Display, NavAnimation, NavToggle, ToggleIcon};
