use crate::shared::date_utils::{day_end_iso, day_start_iso, parse_date_input};
use crate::shared::error::ApiError;
use crate::shared::notification::Notice;
use contracts::domain::a001_log_record::query::total_pages;
use contracts::domain::a001_log_record::{LogPage, LogQuery, LogRecord};
use leptos::prelude::*;

/// Значения формы фильтра как их ввёл пользователь
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogsFilterForm {
    pub server_id: String,
    pub log_type: String,
    pub date_from: String,
    pub date_to: String,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl LogsFilterForm {
    /// Собирает запрос для поиска: всегда первая страница, только
    /// заполненные поля. Период превращается в границы суток (UTC).
    pub fn to_query(&self, page_size: u32) -> Result<LogQuery, String> {
        let from = parse_date_input(&self.date_from);
        let to = parse_date_input(&self.date_to);
        let range = match (from, to) {
            (Some(a), Some(b)) if a <= b => Some((a, b)),
            (Some(a), Some(b)) => Some((b, a)),
            (None, None) => None,
            _ => return Err("Select both start and end dates".to_string()),
        };

        Ok(LogQuery {
            server_id: non_empty(&self.server_id),
            log_type: non_empty(&self.log_type),
            from: range.map(|(start, _)| day_start_iso(start)),
            to: range.map(|(_, end)| day_end_iso(end)),
            ..LogQuery::default().with_page_size(page_size)
        })
    }

    pub fn active_count(&self) -> usize {
        [&self.server_id, &self.log_type, &self.date_from, &self.date_to]
            .iter()
            .filter(|v| !v.trim().is_empty())
            .count()
    }
}

#[derive(Clone, Debug)]
pub struct LogListState {
    pub query: LogQuery,
    pub items: Vec<LogRecord>,
    pub total: u64,
    pub is_loaded: bool,
}

impl Default for LogListState {
    fn default() -> Self {
        Self {
            query: LogQuery::default(),
            items: Vec::new(),
            total: 0,
            is_loaded: false,
        }
    }
}

impl LogListState {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.query.page_size)
    }
}

pub fn create_state() -> RwSignal<LogListState> {
    RwSignal::new(LogListState::default())
}

/// Запрос текущей страницы; `None`, если список уже размонтирован
pub fn current_query(state: RwSignal<LogListState>) -> Option<LogQuery> {
    state.try_with_untracked(|s| s.query.clone())
}

/// Применить загруженную страницу. `false`, если список уже размонтирован.
pub fn apply_page(state: RwSignal<LogListState>, page: LogPage) -> bool {
    state
        .try_update(|s| {
            s.items = page.items;
            s.total = page.total;
            s.is_loaded = true;
        })
        .is_some()
}

/// Что делать после попытки удаления
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub notice: Notice,
    pub refetch: bool,
}

pub fn delete_outcome(result: &Result<(), ApiError>) -> DeleteOutcome {
    match result {
        Ok(()) => DeleteOutcome {
            notice: Notice::success("Log deleted successfully"),
            refetch: true,
        },
        Err(e) => DeleteOutcome {
            notice: Notice::error(format!("Failed to delete log: {}", e)),
            refetch: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::NoticeKind;

    #[test]
    fn test_search_with_type_and_range() {
        let form = LogsFilterForm {
            log_type: "error".to_string(),
            date_from: "2024-01-01".to_string(),
            date_to: "2024-01-31".to_string(),
            ..Default::default()
        };
        let query = form.to_query(10).unwrap();
        assert_eq!(
            query,
            LogQuery {
                server_id: None,
                log_type: Some("error".to_string()),
                from: Some("2024-01-01T00:00:00.000Z".to_string()),
                to: Some("2024-01-31T23:59:59.999Z".to_string()),
                page: 1,
                page_size: 10,
            }
        );
    }

    #[test]
    fn test_search_omits_blank_fields() {
        let form = LogsFilterForm {
            server_id: "   ".to_string(),
            ..Default::default()
        };
        let query = form.to_query(10).unwrap();
        assert!(!query.has_filters());
        let names: Vec<_> = query.to_query_pairs().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["page", "pageSize"]);
    }

    #[test]
    fn test_search_always_starts_at_first_page() {
        let form = LogsFilterForm {
            server_id: " srv-7 ".to_string(),
            ..Default::default()
        };
        let query = form.to_query(50).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 50);
        assert_eq!(query.server_id.as_deref(), Some("srv-7"));
    }

    #[test]
    fn test_half_range_is_rejected() {
        let form = LogsFilterForm {
            date_from: "2024-01-01".to_string(),
            ..Default::default()
        };
        assert!(form.to_query(10).is_err());
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let form = LogsFilterForm {
            date_from: "2024-02-10".to_string(),
            date_to: "2024-02-01".to_string(),
            ..Default::default()
        };
        let query = form.to_query(10).unwrap();
        assert_eq!(query.from.as_deref(), Some("2024-02-01T00:00:00.000Z"));
        assert_eq!(query.to.as_deref(), Some("2024-02-10T23:59:59.999Z"));
    }

    #[test]
    fn test_page_change_keeps_filters() {
        let form = LogsFilterForm {
            server_id: "srv-1".to_string(),
            log_type: "warn".to_string(),
            date_from: "2024-03-01".to_string(),
            date_to: "2024-03-02".to_string(),
        };
        let query = form.to_query(10).unwrap();
        let next = query.with_page(5);
        assert_eq!(LogQuery { page: 1, ..next.clone() }, query);
        assert_eq!(next.page, 5);
    }

    #[test]
    fn test_active_count() {
        let form = LogsFilterForm {
            server_id: "a".to_string(),
            date_to: "2024-01-01".to_string(),
            ..Default::default()
        };
        assert_eq!(form.active_count(), 2);
        assert_eq!(LogsFilterForm::default().active_count(), 0);
    }

    #[test]
    fn test_delete_success_refetches() {
        let outcome = delete_outcome(&Ok(()));
        assert!(outcome.refetch);
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_delete_failure_does_not_refetch() {
        let outcome = delete_outcome(&Err(ApiError::Network("connection refused".to_string())));
        assert!(!outcome.refetch);
        assert_eq!(outcome.notice.kind, NoticeKind::Error);
        assert!(outcome.notice.text.contains("connection refused"));
    }

    #[test]
    fn test_total_pages() {
        let mut state = LogListState::default();
        assert_eq!(state.total_pages(), 1);
        state.total = 21;
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_state_access_after_unmount_is_skipped() {
        let root = Owner::new();
        root.set();
        let page_owner = root.child();
        let state = page_owner.with(create_state);

        assert_eq!(current_query(state), Some(LogQuery::default()));
        assert!(apply_page(
            state,
            LogPage {
                items: Vec::new(),
                total: 3,
            }
        ));
        assert_eq!(state.with_untracked(|s| s.total), 3);

        page_owner.cleanup();

        assert_eq!(current_query(state), None);
        assert!(!apply_page(state, LogPage::default()));
    }
}
