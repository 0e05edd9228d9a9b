//! Theme management module for the application.
//!
//! The rendered theme is derived from `DisplaySettings::dark_mode`; the
//! settings store is its only owner. Nothing here keeps writable theme state.

use crate::system::settings::store::use_settings;
use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Returns the theme name as a string (used for CSS class and data attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Returns the CSS file path for this theme.
    pub fn css_path(&self) -> &'static str {
        match self {
            Theme::Dark => "/static/themes/dark/dark.css",
            Theme::Light => "/static/themes/light/light.css",
        }
    }
}

/// Remembers the last applied theme so the DOM is touched only on change
#[derive(Debug, Default)]
pub struct ThemeTracker {
    applied: Option<Theme>,
}

impl ThemeTracker {
    /// Returns the theme to apply, or None when it is already applied
    pub fn sync(&mut self, dark_mode: bool) -> Option<Theme> {
        let theme = Theme::from_dark_mode(dark_mode);
        if self.applied == Some(theme) {
            return None;
        }
        self.applied = Some(theme);
        Some(theme)
    }
}

/// Apply theme by loading the theme CSS file.
fn apply_theme_css(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    let head = match document.head() {
        Some(h) => h,
        None => return,
    };

    // Remove existing theme stylesheet
    if let Ok(Some(existing)) = document.query_selector("#theme-stylesheet") {
        existing.remove();
    }

    if let Ok(link) = document.create_element("link") {
        let _ = link.set_attribute("id", "theme-stylesheet");
        let _ = link.set_attribute("rel", "stylesheet");
        let _ = link.set_attribute("href", theme.css_path());
        let _ = head.append_child(&link);
    }

    // Also set data-theme attribute on body for additional styling hooks
    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Keeps the document theme in step with the settings store.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let settings = use_settings();
    let dark_mode = Memo::new(move |_| settings.snapshot().dark_mode);
    let tracker = StoredValue::new(ThemeTracker::default());

    Effect::new(move |_| {
        let dark = dark_mode.get();
        if let Some(theme) = tracker.try_update_value(|t| t.sync(dark)).flatten() {
            log::debug!("applying theme: {}", theme.as_str());
            apply_theme_css(theme);
        }
    });

    children()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_applies_initial_theme() {
        let mut tracker = ThemeTracker::default();
        assert_eq!(tracker.sync(false), Some(Theme::Light));
    }

    #[test]
    fn test_switch_to_dark_applies_exactly_once() {
        let mut tracker = ThemeTracker::default();
        tracker.sync(false);
        assert_eq!(tracker.sync(true), Some(Theme::Dark));
        assert_eq!(tracker.sync(true), None);
        assert_eq!(tracker.sync(true), None);
    }

    #[test]
    fn test_unchanged_mode_is_not_reapplied() {
        let mut tracker = ThemeTracker::default();
        tracker.sync(true);
        assert_eq!(tracker.sync(true), None);
        assert_eq!(tracker.sync(false), Some(Theme::Light));
    }
}
