use crate::shared::form::FieldError;
use contracts::shared::display_settings::{DefaultView, DisplaySettings, SettingsPatch};

/// Raw values as typed into the settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub refresh_interval: String,
    pub default_view: String,
    pub log_retention_days: String,
    pub dark_mode: bool,
}

impl From<DisplaySettings> for SettingsForm {
    fn from(s: DisplaySettings) -> Self {
        Self {
            refresh_interval: s.refresh_interval.to_string(),
            default_view: s.default_view.as_str().to_string(),
            log_retention_days: s.log_retention_days.to_string(),
            dark_mode: s.dark_mode,
        }
    }
}

/// What a successful submit changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavePlan {
    pub patch: SettingsPatch,
    /// Dark mode differs from the current settings
    pub theme_changed: bool,
}

fn parse_number(
    raw: &str,
    field: &'static str,
    required: &str,
    errors: &mut Vec<FieldError>,
) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError::new(field, required));
        return None;
    }
    match raw.parse::<u32>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(FieldError::new(field, "Please enter a whole number"));
            None
        }
    }
}

impl SettingsForm {
    /// Parse and bounds-check the form. Any error blocks the save.
    pub fn validate(&self, current: DisplaySettings) -> Result<SavePlan, Vec<FieldError>> {
        let mut errors = Vec::new();
        let refresh_interval = parse_number(
            &self.refresh_interval,
            "refreshInterval",
            "Please enter refresh interval",
            &mut errors,
        );
        let log_retention_days = parse_number(
            &self.log_retention_days,
            "logRetentionDays",
            "Please enter log retention period",
            &mut errors,
        );
        let default_view = match self.default_view.parse::<DefaultView>() {
            Ok(v) => Some(v),
            Err(e) => {
                errors.push(FieldError::new("defaultView", e.to_string()));
                None
            }
        };

        let (Some(refresh_interval), Some(log_retention_days), Some(default_view)) =
            (refresh_interval, log_retention_days, default_view)
        else {
            return Err(errors);
        };

        let candidate = DisplaySettings {
            refresh_interval,
            default_view,
            log_retention_days,
            dark_mode: self.dark_mode,
        };
        candidate.validate().map_err(|bounds| {
            bounds
                .iter()
                .map(|e| FieldError::new(e.field(), e.to_string()))
                .collect::<Vec<_>>()
        })?;

        Ok(SavePlan {
            patch: SettingsPatch::from(candidate),
            theme_changed: candidate.dark_mode != current.dark_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::error_for;

    fn form() -> SettingsForm {
        SettingsForm::from(DisplaySettings::default())
    }

    #[test]
    fn test_refresh_interval_below_minimum_is_rejected() {
        let f = SettingsForm {
            refresh_interval: "4".to_string(),
            ..form()
        };
        let errors = f.validate(DisplaySettings::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "refreshInterval");
        assert!(error_for(&errors, "refreshInterval").is_some());
        assert!(error_for(&errors, "logRetentionDays").is_none());
    }

    #[test]
    fn test_missing_and_garbage_values() {
        let f = SettingsForm {
            refresh_interval: " ".to_string(),
            log_retention_days: "ten".to_string(),
            ..form()
        };
        let errors = f.validate(DisplaySettings::default()).unwrap_err();
        assert_eq!(
            error_for(&errors, "refreshInterval").as_deref(),
            Some("Please enter refresh interval")
        );
        assert_eq!(
            error_for(&errors, "logRetentionDays").as_deref(),
            Some("Please enter a whole number")
        );
    }

    #[test]
    fn test_retention_above_maximum_is_rejected() {
        let f = SettingsForm {
            log_retention_days: "366".to_string(),
            ..form()
        };
        let errors = f.validate(DisplaySettings::default()).unwrap_err();
        assert_eq!(errors[0].field, "logRetentionDays");
    }

    #[test]
    fn test_dark_mode_from_light_marks_theme_change() {
        let current = DisplaySettings::default();
        let f = SettingsForm {
            dark_mode: true,
            ..form()
        };
        let plan = f.validate(current).unwrap();
        assert!(plan.theme_changed);
        let saved = current.merged(plan.patch);
        assert!(saved.dark_mode);
    }

    #[test]
    fn test_valid_form_without_theme_change() {
        let f = SettingsForm {
            refresh_interval: "60".to_string(),
            default_view: "logs".to_string(),
            ..form()
        };
        let plan = f.validate(DisplaySettings::default()).unwrap();
        assert!(!plan.theme_changed);
        assert_eq!(plan.patch.refresh_interval, Some(60));
        assert_eq!(plan.patch.default_view, Some(DefaultView::Logs));
    }
}
