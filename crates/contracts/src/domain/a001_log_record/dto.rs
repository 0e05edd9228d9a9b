use super::query::total_pages;
use serde::{Deserialize, Serialize};

/// Запись лога, как её отдаёт сервис хранения логов
///
/// `id` неизменяем после создания, `timestamp` проставляет сервис.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub id: String,
    pub server_id: String,
    #[serde(rename = "type")]
    pub log_type: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Частичная запись для создания/обновления (POST/PUT тело)
///
/// Отсутствующие поля не сериализуются, сервис оставляет их без изменений.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecordInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub log_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl From<&LogRecord> for LogRecordInput {
    fn from(record: &LogRecord) -> Self {
        Self {
            server_id: Some(record.server_id.clone()),
            log_type: Some(record.log_type.clone()),
            count: Some(record.count),
            value: Some(record.value.clone()),
        }
    }
}

/// Ответ со страницей логов и полным количеством записей по фильтру
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPage {
    pub items: Vec<LogRecord>,
    pub total: u64,
}

impl LogPage {
    pub fn total_pages(&self, page_size: u32) -> u32 {
        total_pages(self.total, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_camel_case_wire_names() {
        let json = r#"{
            "id": "abc123",
            "serverId": "srv-1",
            "type": "error",
            "count": 3,
            "value": "disk full",
            "timestamp": "2024-01-05T10:00:00Z"
        }"#;
        let record: LogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "abc123");
        assert_eq!(record.server_id, "srv-1");
        assert_eq!(record.log_type, "error");
        assert_eq!(record.count, 3);
        assert_eq!(record.timestamp.as_deref(), Some("2024-01-05T10:00:00Z"));
    }

    #[test]
    fn test_record_tolerates_missing_optional_fields() {
        let json = r#"{"id": "x", "serverId": "s", "type": "info"}"#;
        let record: LogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.count, 0);
        assert!(record.value.is_empty());
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn test_input_skips_absent_fields() {
        let input = LogRecordInput {
            log_type: Some("warn".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "warn" }));
    }

    #[test]
    fn test_total_pages() {
        let page = LogPage { items: vec![], total: 25 };
        assert_eq!(page.total_pages(10), 3);
        assert_eq!(page.total_pages(25), 1);
        assert_eq!(LogPage::default().total_pages(10), 1);
        assert_eq!(page.total_pages(0), 25);
    }
}
