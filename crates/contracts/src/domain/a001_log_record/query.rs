use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Количество страниц при заданном размере страницы (минимум 1)
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    u32::try_from(total.div_ceil(size).max(1)).unwrap_or(u32::MAX)
}

/// Параметры запроса списка логов (GET /logs)
///
/// `page` считается с 1. Пустые фильтры не передаются вовсе,
/// а не отправляются пустыми строками.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub log_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            server_id: None,
            log_type: None,
            from: None,
            to: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl LogQuery {
    /// Та же выборка, другая страница. Фильтры не трогаем.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Смена размера страницы всегда возвращает на первую страницу
    pub fn with_page_size(&self, page_size: u32) -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: page_size.max(1),
            ..self.clone()
        }
    }

    pub fn has_filters(&self) -> bool {
        self.server_id.is_some() || self.log_type.is_some() || self.from.is_some() || self.to.is_some()
    }

    /// Пары (имя, значение) для строки запроса в порядке
    /// serverId, type, from, to, page, pageSize.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(6);
        let optional = [
            ("serverId", &self.server_id),
            ("type", &self.log_type),
            ("from", &self.from),
            ("to", &self.to),
        ];
        for (name, value) in optional {
            if let Some(v) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                pairs.push((name, v.to_string()));
            }
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("pageSize", self.page_size.to_string()));
        pairs
    }
}
