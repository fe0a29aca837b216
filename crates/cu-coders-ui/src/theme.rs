//! Theme configuration for the CU-Coders header.
//!
//! Light theme with a violet primary, plus the breakpoint utility classes
//! the header's style bundles refer to (`mn:hidden`, `lg:flex`, ...).

use cu_coders_core::BreakpointKey;

/// Color palette.
pub mod colors {
    /// Primary brand scale.
    pub mod primary {
        /// Hover and focus accent.
        pub const P500: &str = "#6415ff";
        /// Filled button hover background.
        pub const P700: &str = "#4c12c0";
    }

    /// Neutral scale.
    pub mod gray {
        /// Text on filled buttons.
        pub const G100: &str = "#f7fafc";
        /// Text on hovered filled buttons.
        pub const G200: &str = "#edf2f7";
        /// Overlay border.
        pub const G300: &str = "#e2e8f0";
        /// Body text.
        pub const G900: &str = "#1a202c";
    }

    /// Panel background.
    pub const WHITE: &str = "#ffffff";

    /// Focus ring.
    pub const FOCUS_OUTLINE: &str = "0 0 0 3px rgba(100, 21, 255, 0.5)";
}

/// Typography configuration.
pub mod typography {
    /// Font family.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

    /// Font sizes.
    pub mod sizes {
        /// Desktop link text.
        pub const SM: &str = "0.875rem";
        /// Mobile link text.
        pub const LG: &str = "1.125rem";
        /// Brand text.
        pub const XXL: &str = "1.5rem";
    }
}

/// Transition configuration.
pub mod animation {
    /// Link and toggle color transitions.
    pub const LINK: &str = "300ms cubic-bezier(0.4, 0, 0.2, 1)";
    /// Mobile panel slide.
    pub const PANEL: &str = "400ms cubic-bezier(0.34, 1.56, 0.64, 1)";
}

/// Minimum widths at which each screen prefix applies.
pub mod screens {
    use cu_coders_core::BreakpointKey;

    /// Min width for `sm:` classes.
    pub const SM: &str = "640px";
    /// Min width for `md:` classes.
    pub const MD: &str = "768px";
    /// Min width for `lg:` classes.
    pub const LG: &str = "1024px";
    /// Min width for `mn:` classes.
    pub const MN: &str = "1100px";
    /// Min width for `xl:` classes.
    pub const XL: &str = "1280px";

    /// Min width for a breakpoint's own screen.
    pub const fn min_width(key: BreakpointKey) -> &'static str {
        match key {
            BreakpointKey::Sm => SM,
            BreakpointKey::Md => MD,
            BreakpointKey::Lg => LG,
            BreakpointKey::Mn => MN,
            BreakpointKey::Xl => XL,
        }
    }
}

/// Escape a utility class (`mn:hidden`) for use as a CSS selector.
pub fn class_selector(class: &str) -> String {
    format!(".{}", class.replace(':', r"\:"))
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  --primary-500: {p500};
  --primary-700: {p700};
  --gray-100: {g100};
  --gray-200: {g200};
  --gray-300: {g300};
  --gray-900: {g900};
  --white: {white};
  --focus-outline: {focus};
  --font-family: {font_family};
  --font-size-sm: {font_sm};
  --font-size-lg: {font_lg};
  --font-size-xxl: {font_xxl};
  --transition-link: {transition_link};
  --transition-panel: {transition_panel};
}}",
        p500 = colors::primary::P500,
        p700 = colors::primary::P700,
        g100 = colors::gray::G100,
        g200 = colors::gray::G200,
        g300 = colors::gray::G300,
        g900 = colors::gray::G900,
        white = colors::WHITE,
        focus = colors::FOCUS_OUTLINE,
        font_family = typography::FONT_FAMILY,
        font_sm = typography::sizes::SM,
        font_lg = typography::sizes::LG,
        font_xxl = typography::sizes::XXL,
        transition_link = animation::LINK,
        transition_panel = animation::PANEL,
    )
}

/// Media-query rules for every screen a style bundle can reference.
///
/// Every bundle class is emitted once, so `xl` (which reuses the `lg`
/// bundle) needs nothing of its own.
pub fn generate_breakpoint_css() -> String {
    let mut css = String::new();
    let mut seen: Vec<&str> = Vec::new();

    for key in BreakpointKey::ALL {
        let bundle = key.style_bundle();
        if seen.contains(&bundle.screen) {
            continue;
        }
        seen.push(bundle.screen);

        let min_width = bundle
            .screen
            .parse()
            .map_or(screens::MN, screens::min_width);

        css.push_str(&format!(
            "@media (min-width: {min_width}) {{\n  {hidden} {{ display: none; }}\n  {flex} {{ display: flex; }}\n}}\n",
            hidden = class_selector(bundle.mobile_nav_links),
            flex = class_selector(bundle.desktop_nav_links),
        ));
    }

    css
}

/// Base rules for the header parts.
pub fn generate_header_css() -> String {
    r".site-header { display: flex; justify-content: space-between; align-items: center; max-width: 1280px; margin: 0 auto; font-family: var(--font-family); }
.nav-links { display: flex; justify-content: flex-end; flex-wrap: wrap; }
.nav-link { font-size: var(--font-size-lg); margin: 0.5rem 0; font-weight: 600; letter-spacing: 0.025em; padding-bottom: 0.25rem; border-bottom: 2px solid transparent; color: inherit; text-decoration: none; cursor: pointer; transition: all var(--transition-link); }
.nav-link:hover { border-color: var(--primary-500); }
.nav-link:hover, .nav-link:focus { color: var(--primary-500); }
.nav-link.primary { padding: 0.75rem 2rem; border-radius: 0.25rem; background: var(--primary-500); color: var(--gray-100); border-bottom: 0; }
.nav-link.primary:hover, .nav-link.primary:focus { background: var(--primary-700); color: var(--gray-200); box-shadow: var(--focus-outline); }
.logo-link { display: flex; align-items: center; font-weight: 900; border-bottom: 0; font-size: var(--font-size-xxl); margin-left: 0; }
.logo-link img { width: 2.5rem; margin-right: 0.75rem; }
.desktop-nav-links { display: none; flex: 1 1 0%; justify-content: space-between; align-items: center; }
.mobile-nav-links-container { display: flex; flex: 1 1 0%; align-items: center; justify-content: space-between; }
.mobile-nav-links { z-index: 10; position: fixed; top: 0; left: 0; right: 0; margin: 1.5rem 1rem; padding: 2rem; border: 1px solid var(--gray-300); text-align: center; border-radius: 0.5rem; color: var(--gray-900); background: var(--white); transition: transform var(--transition-panel); }
.mobile-nav-links .nav-links { flex-direction: column; align-items: center; }
.nav-toggle { z-index: 20; background: none; border: 0; color: inherit; cursor: pointer; transition: color var(--transition-link); }
.nav-toggle:hover, .nav-toggle:focus { outline: none; color: var(--primary-500); }
.nav-toggle-icon { width: 1.5rem; height: 1.5rem; }
@media (min-width: 1024px) {
  .nav-link { font-size: var(--font-size-sm); margin: 0 1rem; }
  .nav-link.primary { margin: 0; }
}
"
    .to_string()
}

/// Full stylesheet: variables, header rules, then breakpoint utilities.
pub fn generate_stylesheet() -> String {
    format!(
        "{}\n{}\n{}",
        generate_css_variables(),
        generate_header_css(),
        generate_breakpoint_css()
    )
}
