//! Пользовательские настройки отображения дашборда
//!
//! Живут только в клиентском состоянии вкладки. Границы числовых полей
//! проверяет форма (`DisplaySettings::validate`), а не хранилище.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

pub const REFRESH_INTERVAL_RANGE: RangeInclusive<u32> = 5..=300;
pub const LOG_RETENTION_DAYS_RANGE: RangeInclusive<u32> = 1..=365;

pub const DEFAULT_REFRESH_INTERVAL: u32 = 30;
pub const DEFAULT_LOG_RETENTION_DAYS: u32 = 30;

/// Стартовая страница приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    #[default]
    Dashboard,
    Logs,
    Analysis,
    Settings,
}

impl DefaultView {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultView::Dashboard => "dashboard",
            DefaultView::Logs => "logs",
            DefaultView::Analysis => "analysis",
            DefaultView::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DefaultView::Dashboard => "Dashboard",
            DefaultView::Logs => "Logs",
            DefaultView::Analysis => "Analysis",
            DefaultView::Settings => "Settings",
        }
    }

    pub fn all() -> [DefaultView; 4] {
        [
            DefaultView::Dashboard,
            DefaultView::Logs,
            DefaultView::Analysis,
            DefaultView::Settings,
        ]
    }
}

impl fmt::Display for DefaultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for DefaultView {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" => Ok(DefaultView::Dashboard),
            "logs" => Ok(DefaultView::Logs),
            "analysis" => Ok(DefaultView::Analysis),
            "settings" => Ok(DefaultView::Settings),
            _ => Err(UnknownView(s.to_string())),
        }
    }
}

/// Настройки отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    /// Интервал обновления данных, секунды
    pub refresh_interval: u32,
    pub default_view: DefaultView,
    /// Срок хранения логов (только отображение), дни
    pub log_retention_days: u32,
    pub dark_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            default_view: DefaultView::Dashboard,
            log_retention_days: DEFAULT_LOG_RETENTION_DAYS,
            dark_mode: false,
        }
    }
}

/// Частичное обновление настроек: `None` = поле не меняется
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub refresh_interval: Option<u32>,
    pub default_view: Option<DefaultView>,
    pub log_retention_days: Option<u32>,
    pub dark_mode: Option<bool>,
}

impl From<DisplaySettings> for SettingsPatch {
    fn from(s: DisplaySettings) -> Self {
        Self {
            refresh_interval: Some(s.refresh_interval),
            default_view: Some(s.default_view),
            log_retention_days: Some(s.log_retention_days),
            dark_mode: Some(s.dark_mode),
        }
    }
}

/// Ошибка проверки поля формы настроек
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Refresh interval must be between {min} and {max} seconds")]
    RefreshIntervalOutOfRange { value: u32, min: u32, max: u32 },
    #[error("Log retention must be between {min} and {max} days")]
    RetentionOutOfRange { value: u32, min: u32, max: u32 },
}

impl SettingsError {
    /// Имя поля формы, к которому относится ошибка
    pub fn field(&self) -> &'static str {
        match self {
            SettingsError::RefreshIntervalOutOfRange { .. } => "refreshInterval",
            SettingsError::RetentionOutOfRange { .. } => "logRetentionDays",
        }
    }
}

impl DisplaySettings {
    /// Накладывает заданные поля патча поверх текущих значений.
    /// Проверки границ здесь нет.
    pub fn merged(&self, patch: SettingsPatch) -> Self {
        Self {
            refresh_interval: patch.refresh_interval.unwrap_or(self.refresh_interval),
            default_view: patch.default_view.unwrap_or(self.default_view),
            log_retention_days: patch.log_retention_days.unwrap_or(self.log_retention_days),
            dark_mode: patch.dark_mode.unwrap_or(self.dark_mode),
        }
    }

    /// Проверка границ для формы. Возвращает все нарушения сразу.
    pub fn validate(&self) -> Result<(), Vec<SettingsError>> {
        let mut errors = Vec::new();
        if !REFRESH_INTERVAL_RANGE.contains(&self.refresh_interval) {
            errors.push(SettingsError::RefreshIntervalOutOfRange {
                value: self.refresh_interval,
                min: *REFRESH_INTERVAL_RANGE.start(),
                max: *REFRESH_INTERVAL_RANGE.end(),
            });
        }
        if !LOG_RETENTION_DAYS_RANGE.contains(&self.log_retention_days) {
            errors.push(SettingsError::RetentionOutOfRange {
                value: self.log_retention_days,
                min: *LOG_RETENTION_DAYS_RANGE.start(),
                max: *LOG_RETENTION_DAYS_RANGE.end(),
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = DisplaySettings::default();
        assert_eq!(s.refresh_interval, 30);
        assert_eq!(s.default_view, DefaultView::Dashboard);
        assert_eq!(s.log_retention_days, 30);
        assert!(!s.dark_mode);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_merge_single_field_leaves_others() {
        let base = DisplaySettings {
            refresh_interval: 60,
            default_view: DefaultView::Logs,
            log_retention_days: 90,
            dark_mode: true,
        };
        let merged = base.merged(SettingsPatch {
            log_retention_days: Some(7),
            ..Default::default()
        });
        assert_eq!(merged.log_retention_days, 7);
        assert_eq!(merged.refresh_interval, 60);
        assert_eq!(merged.default_view, DefaultView::Logs);
        assert!(merged.dark_mode);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = DisplaySettings::default();
        assert_eq!(base.merged(SettingsPatch::default()), base);
    }

    #[test]
    fn test_merge_does_not_validate() {
        let merged = DisplaySettings::default().merged(SettingsPatch {
            refresh_interval: Some(1),
            ..Default::default()
        });
        assert_eq!(merged.refresh_interval, 1);
    }

    #[test]
    fn test_refresh_interval_below_minimum_rejected() {
        let s = DisplaySettings {
            refresh_interval: 4,
            ..Default::default()
        };
        let errors = s.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "refreshInterval");
        assert_eq!(
            errors[0].to_string(),
            "Refresh interval must be between 5 and 300 seconds"
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for (interval, days) in [(5, 1), (300, 365)] {
            let s = DisplaySettings {
                refresh_interval: interval,
                log_retention_days: days,
                ..Default::default()
            };
            assert!(s.validate().is_ok());
        }
    }

    #[test]
    fn test_all_violations_reported() {
        let s = DisplaySettings {
            refresh_interval: 301,
            log_retention_days: 0,
            ..Default::default()
        };
        let fields: Vec<_> = s.validate().unwrap_err().iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["refreshInterval", "logRetentionDays"]);
    }

    #[test]
    fn test_view_parse() {
        assert_eq!("logs".parse::<DefaultView>(), Ok(DefaultView::Logs));
        assert_eq!(" Analysis ".parse::<DefaultView>(), Ok(DefaultView::Analysis));
        assert!("reports".parse::<DefaultView>().is_err());
        for view in DefaultView::all() {
            assert_eq!(view.as_str().parse::<DefaultView>(), Ok(view));
        }
    }

    #[test]
    fn test_settings_wire_format() {
        let json = serde_json::to_value(DisplaySettings::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "refreshInterval": 30,
                "defaultView": "dashboard",
                "logRetentionDays": 30,
                "darkMode": false
            })
        );
    }
}
