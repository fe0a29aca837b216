//! Open/closed state of the mobile navigation overlay.
//!
//! The overlay starts off-screen and hidden. The first toggle slides it in,
//! after which it stays displayed and only its horizontal offset changes.

use serde::{Deserialize, Serialize};

/// Horizontal offset of the overlay when it is out of view.
pub const HIDDEN_OFFSET_PERCENT: u16 = 150;

/// Horizontal offset of the overlay when it is in view.
pub const SHOWN_OFFSET_PERCENT: u16 = 0;

/// CSS `display` value applied to the overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    /// Not laid out at all.
    None,
    /// Laid out as a block.
    Block,
}

impl Display {
    /// CSS keyword for this value.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
        }
    }
}

/// Animation target for the overlay panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavAnimation {
    /// `translateX` offset in percent of the panel width.
    pub translate_x_percent: u16,
    /// Display mode.
    pub display: Display,
}

impl NavAnimation {
    /// State before the user has ever opened the menu.
    pub const INITIAL: Self = Self {
        translate_x_percent: HIDDEN_OFFSET_PERCENT,
        display: Display::None,
    };

    /// Render as an inline style declaration.
    pub fn to_style(&self) -> String {
        format!(
            "transform: translateX({}%); display: {}",
            self.translate_x_percent,
            self.display.as_css()
        )
    }
}

impl Default for NavAnimation {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Icon shown on the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Hamburger, shown while closed.
    Menu,
    /// Cross, shown while open.
    Close,
}

/// State of the mobile menu toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavToggle {
    is_open: bool,
    animation: NavAnimation,
}

impl NavToggle {
    /// Create a closed toggle.
    pub const fn new() -> Self {
        Self {
            is_open: false,
            animation: NavAnimation::INITIAL,
        }
    }

    /// Whether the overlay is open.
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current animation target.
    pub const fn animation(&self) -> NavAnimation {
        self.animation
    }

    /// Icon matching the current state.
    pub const fn icon(&self) -> ToggleIcon {
        if self.is_open {
            ToggleIcon::Close
        } else {
            ToggleIcon::Menu
        }
    }

    /// Class name reflecting the current state.
    pub const fn state_class(&self) -> &'static str {
        if self.is_open { "open" } else { "closed" }
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.set_open(!self.is_open);
    }

    /// Open the overlay. No-op when already open.
    pub fn open(&mut self) {
        if !self.is_open {
            self.set_open(true);
        }
    }

    /// Close the overlay. No-op when already closed.
    pub fn close(&mut self) {
        if self.is_open {
            self.set_open(false);
        }
    }

    fn set_open(&mut self, open: bool) {
        self.is_open = open;
        self.animation = NavAnimation {
            translate_x_percent: if open {
                SHOWN_OFFSET_PERCENT
            } else {
                HIDDEN_OFFSET_PERCENT
            },
            display: Display::Block,
        };
        tracing::debug!(open, "Mobile nav toggled");
    }
}
