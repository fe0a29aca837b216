//! Header configuration.
//!
//! Holds the deployment-specific values the header needs: where to send the
//! logout request, where to land afterwards, and the site branding.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::breakpoint::BreakpointKey;
use crate::error::{Error, Result};
use crate::header::DEFAULT_CLASS_NAME;
use crate::links::LogoLink;

/// Logout endpoint of the CU-Coders backend.
pub const DEFAULT_LOGOUT_ENDPOINT: &str = "https://main-cu-coders.herokuapp.com/auth/logout";

/// Page loaded after a logout attempt that reached the server.
pub const DEFAULT_REDIRECT: &str = "/";

/// Header configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderConfig {
    /// URL of the logout endpoint.
    #[serde(default = "default_logout_endpoint")]
    pub logout_endpoint: String,
    /// Location to navigate to after logging out.
    #[serde(default = "default_redirect")]
    pub redirect_to: String,
    /// Brand link.
    #[serde(default)]
    pub logo: LogoLink,
    /// Default class for the `<header>` element.
    #[serde(default = "default_class_name")]
    pub class_name: String,
    /// Default collapse breakpoint.
    #[serde(default)]
    pub collapse_breakpoint: BreakpointKey,
}

fn default_logout_endpoint() -> String {
    DEFAULT_LOGOUT_ENDPOINT.to_string()
}

fn default_redirect() -> String {
    DEFAULT_REDIRECT.to_string()
}

fn default_class_name() -> String {
    DEFAULT_CLASS_NAME.to_string()
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            logout_endpoint: default_logout_endpoint(),
            redirect_to: default_redirect(),
            logo: LogoLink::default(),
            class_name: default_class_name(),
            collapse_breakpoint: BreakpointKey::default(),
        }
    }
}

impl HeaderConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(endpoint = %config.logout_endpoint, "Loaded header configuration");
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the configured values are usable.
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.logout_endpoint.as_str();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            warn!(endpoint, "Rejected logout endpoint");
            return Err(Error::Configuration(format!(
                "logout endpoint must be an http(s) URL: {endpoint}"
            )));
        }

        if self.redirect_to.trim().is_empty() {
            return Err(Error::Configuration(
                "redirect target must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
