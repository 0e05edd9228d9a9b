//! Хранилище настроек отображения
//!
//! Явный объект, который `App` кладёт в контекст; глобального состояния нет.
//! Жизненный цикл: значения по умолчанию при загрузке → `update` → `reset`.
//! Хранилище единственный владелец `dark_mode`, тема выводится из него.

use contracts::shared::display_settings::{DisplaySettings, SettingsPatch};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SettingsStore {
    state: RwSignal<DisplaySettings>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::with_settings(DisplaySettings::default())
    }

    pub fn with_settings(initial: DisplaySettings) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    /// Current settings, tracked by the reactive graph
    pub fn snapshot(&self) -> DisplaySettings {
        self.state.get()
    }

    pub fn snapshot_untracked(&self) -> DisplaySettings {
        self.state.get_untracked()
    }

    /// Merge the provided fields over the current state. No bounds checks.
    pub fn update(&self, patch: SettingsPatch) -> DisplaySettings {
        let mut result = self.state.get_untracked();
        self.state.update(|s| {
            *s = s.merged(patch);
            result = *s;
        });
        log::debug!("settings updated: {:?}", result);
        result
    }

    /// Replace everything with the built-in defaults
    pub fn reset(&self) -> DisplaySettings {
        let defaults = DisplaySettings::default();
        self.state.set(defaults);
        log::debug!("settings reset to defaults");
        defaults
    }

    pub fn toggle_dark_mode(&self) -> DisplaySettings {
        let dark_mode = !self.state.get_untracked().dark_mode;
        self.update(SettingsPatch {
            dark_mode: Some(dark_mode),
            ..Default::default()
        })
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_settings() -> SettingsStore {
    use_context::<SettingsStore>().expect("SettingsStore not found. Provide it in App.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::display_settings::DefaultView;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.set();
        f()
    }

    #[test]
    fn test_initialized_with_defaults() {
        with_owner(|| {
            let store = SettingsStore::new();
            assert_eq!(store.snapshot_untracked(), DisplaySettings::default());
        });
    }

    #[test]
    fn test_update_single_field() {
        with_owner(|| {
            let store = SettingsStore::new();
            let updated = store.update(SettingsPatch {
                default_view: Some(DefaultView::Logs),
                ..Default::default()
            });
            assert_eq!(updated.default_view, DefaultView::Logs);
            assert_eq!(updated.refresh_interval, 30);
            assert_eq!(updated.log_retention_days, 30);
            assert!(!updated.dark_mode);
            assert_eq!(store.snapshot_untracked(), updated);
        });
    }

    #[test]
    fn test_reset_after_repeated_updates() {
        with_owner(|| {
            let store = SettingsStore::new();
            for i in 0..5 {
                store.update(SettingsPatch {
                    refresh_interval: Some(60 + i),
                    log_retention_days: Some(100),
                    dark_mode: Some(i % 2 == 0),
                    default_view: Some(DefaultView::Analysis),
                });
            }
            assert_eq!(store.reset(), DisplaySettings::default());
            assert_eq!(store.snapshot_untracked(), DisplaySettings::default());
        });
    }

    #[test]
    fn test_toggle_dark_mode() {
        with_owner(|| {
            let store = SettingsStore::new();
            assert!(store.toggle_dark_mode().dark_mode);
            assert!(!store.toggle_dark_mode().dark_mode);
        });
    }
}
