use crate::shared::form::FieldError;
use contracts::domain::a001_log_record::{LogRecord, LogRecordInput};
use leptos::prelude::*;

/// Что открыто в редакторе
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorTarget {
    New,
    Existing(String),
}

impl EditorTarget {
    pub fn title(&self) -> String {
        match self {
            EditorTarget::New => "New log".to_string(),
            EditorTarget::Existing(id) => format!("Log {}", id),
        }
    }
}

/// Сообщить списку о закрытии/сохранении после ответа сервера.
/// `false`, если список уже размонтирован.
pub fn notify_parent(callback: Callback<()>) -> bool {
    callback.try_run(()).is_some()
}

/// Поля формы редактирования записи
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEditorForm {
    pub server_id: String,
    pub log_type: String,
    pub count: String,
    pub value: String,
}

impl From<&LogRecord> for LogEditorForm {
    fn from(record: &LogRecord) -> Self {
        Self {
            server_id: record.server_id.clone(),
            log_type: record.log_type.clone(),
            count: record.count.to_string(),
            value: record.value.clone(),
        }
    }
}

impl LogEditorForm {
    /// Проверка формы. `id` и `timestamp` в тело не попадают никогда.
    pub fn to_input(&self) -> Result<LogRecordInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        let server_id = self.server_id.trim();
        if server_id.is_empty() {
            errors.push(FieldError::new("serverId", "Server ID is required"));
        }
        let log_type = self.log_type.trim();
        if log_type.is_empty() {
            errors.push(FieldError::new("type", "Type is required"));
        }
        let count = match self.count.trim() {
            "" => Some(0),
            raw => match raw.parse::<i64>() {
                Ok(v) if v >= 0 => Some(v),
                _ => {
                    errors.push(FieldError::new("count", "Count must be a non-negative integer"));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LogRecordInput {
            server_id: Some(server_id.to_string()),
            log_type: Some(log_type.to_string()),
            count,
            value: Some(self.value.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::error_for;

    #[test]
    fn test_valid_form() {
        let form = LogEditorForm {
            server_id: " srv-1 ".to_string(),
            log_type: "warn".to_string(),
            count: "12".to_string(),
            value: "slow response".to_string(),
        };
        let input = form.to_input().unwrap();
        assert_eq!(input.server_id.as_deref(), Some("srv-1"));
        assert_eq!(input.log_type.as_deref(), Some("warn"));
        assert_eq!(input.count, Some(12));
        assert_eq!(input.value.as_deref(), Some("slow response"));
    }

    #[test]
    fn test_required_fields() {
        let errors = LogEditorForm::default().to_input().unwrap_err();
        assert!(error_for(&errors, "serverId").is_some());
        assert!(error_for(&errors, "type").is_some());
        assert!(error_for(&errors, "count").is_none());
    }

    #[test]
    fn test_negative_count_rejected() {
        let form = LogEditorForm {
            server_id: "s".to_string(),
            log_type: "info".to_string(),
            count: "-1".to_string(),
            ..Default::default()
        };
        let errors = form.to_input().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "count");
    }

    #[test]
    fn test_form_from_record() {
        let record = LogRecord {
            id: "abc123".to_string(),
            server_id: "srv".to_string(),
            log_type: "error".to_string(),
            count: 4,
            value: "boom".to_string(),
            timestamp: None,
        };
        let form = LogEditorForm::from(&record);
        assert_eq!(form.count, "4");
        assert_eq!(form.to_input().unwrap(), LogRecordInput::from(&record));
    }

    #[test]
    fn test_target_title() {
        assert_eq!(EditorTarget::New.title(), "New log");
        assert_eq!(EditorTarget::Existing("x1".to_string()).title(), "Log x1");
    }

    #[test]
    fn test_notify_parent_after_unmount() {
        let root = Owner::new();
        root.set();
        let list_owner = root.child();
        let calls = list_owner.with(|| RwSignal::new(0));
        let on_saved = list_owner.with(|| Callback::new(move |_: ()| calls.update(|n| *n += 1)));

        assert!(notify_parent(on_saved));
        assert_eq!(calls.get_untracked(), 1);

        list_owner.cleanup();

        assert!(!notify_parent(on_saved));
    }
}
