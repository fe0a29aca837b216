//! Reactive handle over the mobile menu toggle.

use cu_coders_core::{NavAnimation, NavToggle, ToggleIcon};
use leptos::prelude::*;

/// Provides access to the mobile menu state for child components.
#[derive(Clone, Copy)]
pub struct NavToggleHandle {
    state: RwSignal<NavToggle>,
}

impl NavToggleHandle {
    /// Create a closed toggle owned by the current reactive scope.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(NavToggle::new()),
        }
    }

    /// Whether the mobile menu is currently open.
    pub fn is_open(&self) -> bool {
        self.state.with(NavToggle::is_open)
    }

    /// Icon for the toggle button.
    pub fn icon(&self) -> ToggleIcon {
        self.state.with(NavToggle::icon)
    }

    /// `open` or `closed`.
    pub fn state_class(&self) -> &'static str {
        self.state.with(NavToggle::state_class)
    }

    /// Current animation target for the overlay panel.
    pub fn animation(&self) -> NavAnimation {
        self.state.with(NavToggle::animation)
    }

    /// Toggle the mobile menu.
    pub fn toggle(&self) {
        self.state.update(NavToggle::toggle);
    }

    /// Open the mobile menu.
    pub fn open(&self) {
        self.state.update(NavToggle::open);
    }

    /// Close the mobile menu.
    pub fn close(&self) {
        self.state.update(NavToggle::close);
    }
}

impl Default for NavToggleHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Return the toggle provided by an enclosing component, or provide a new one.
pub fn use_nav_toggle() -> NavToggleHandle {
    use_context::<NavToggleHandle>().unwrap_or_else(|| {
        let handle = NavToggleHandle::new();
        provide_context(handle);
        handle
    })
}

/// Inline style for the overlay panel: animation target plus slide transition.
pub fn panel_style(animation: NavAnimation) -> String {
    format!("{}; transition: transform var(--transition-panel)", animation.to_style())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_style_starts_hidden() {
        let style = panel_style(NavAnimation::INITIAL);
        assert!(style.starts_with("transform: translateX(150%); display: none"));
        assert!(style.ends_with("transition: transform var(--transition-panel)"));
    }

    #[test]
    fn test_handle_toggles() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = NavToggleHandle::new();
            assert!(!handle.is_open());
            handle.toggle();
            assert!(handle.is_open());
            assert_eq!(handle.icon(), ToggleIcon::Close);
            assert_eq!(handle.state_class(), "open");
            handle.close();
            assert!(!handle.is_open());
        });
    }
}
