use serde::{Deserialize, Serialize};

/// Нормализованный уровень лога
///
/// Поле `type` у записи свободное, уровень выводится по подстроке
/// без учёта регистра: error → warn → info → debug, иначе `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Other,
}

impl LogLevel {
    pub fn classify(log_type: &str) -> Self {
        let lower = log_type.to_lowercase();
        if lower.contains("error") {
            LogLevel::Error
        } else if lower.contains("warn") {
            LogLevel::Warn
        } else if lower.contains("info") {
            LogLevel::Info
        } else if lower.contains("debug") {
            LogLevel::Debug
        } else {
            LogLevel::Other
        }
    }

    /// Все уровни в порядке отображения
    pub fn all() -> [LogLevel; 5] {
        [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Other,
        ]
    }

    /// Значение для фильтра `type` (для `Other` фильтра нет)
    pub fn filter_value(&self) -> Option<&'static str> {
        match self {
            LogLevel::Error => Some("error"),
            LogLevel::Warn => Some("warn"),
            LogLevel::Info => Some("info"),
            LogLevel::Debug => Some("debug"),
            LogLevel::Other => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warning",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_substring() {
        assert_eq!(LogLevel::classify("ERROR"), LogLevel::Error);
        assert_eq!(LogLevel::classify("http_error"), LogLevel::Error);
        assert_eq!(LogLevel::classify("Warning"), LogLevel::Warn);
        assert_eq!(LogLevel::classify("info"), LogLevel::Info);
        assert_eq!(LogLevel::classify("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::classify("trace"), LogLevel::Other);
        assert_eq!(LogLevel::classify(""), LogLevel::Other);
    }

    #[test]
    fn test_error_wins_over_later_levels() {
        assert_eq!(LogLevel::classify("info-error"), LogLevel::Error);
        assert_eq!(LogLevel::classify("warn/debug"), LogLevel::Warn);
    }
}
