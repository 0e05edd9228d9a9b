//! Последние записи для дашбордов
//!
//! Оба дашборда строятся по первой странице списка логов (до 100 записей).
//! Загрузка защищена номером запроса, как и в списке.

use crate::domain::a001_log_record::api;
use crate::shared::request_seq::RequestSequence;
use contracts::domain::a001_log_record::{LogQuery, LogRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Сколько записей берут дашборды
pub const RECENT_LIMIT: u32 = 100;

pub fn recent_query() -> LogQuery {
    LogQuery::default().with_page_size(RECENT_LIMIT)
}

/// Reactive handle over the latest page of logs
#[derive(Clone, Copy)]
pub struct RecentLogs {
    pub items: RwSignal<Vec<LogRecord>>,
    pub total: RwSignal<u64>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    sequence: StoredValue<RequestSequence>,
}

impl RecentLogs {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            sequence: StoredValue::new(RequestSequence::new()),
        }
    }

    pub fn reload(&self) {
        let Some(ticket) = self.sequence.try_with_value(|seq| seq.next()) else {
            return;
        };
        let this = *self;
        this.loading.set(true);

        spawn_local(async move {
            let result = api::list_logs(&recent_query()).await;

            let is_latest = this
                .sequence
                .try_with_value(|seq| seq.is_latest(ticket))
                .unwrap_or(false);
            if !is_latest {
                return;
            }

            match result {
                Ok(page) => {
                    let _ = this.total.try_set(page.total);
                    let _ = this.items.try_set(page.items);
                    let _ = this.error.try_set(None);
                }
                Err(e) => {
                    log::warn!("dashboard load failed: {}", e);
                    let _ = this.error.try_set(Some(format!("Failed to load logs: {}", e)));
                }
            }
            let _ = this.loading.try_set(false);
        });
    }

    /// Перезагружать каждые `interval_secs()` секунд, пока компонент жив.
    /// Интервал читается заново на каждом шаге.
    pub fn poll_every(&self, interval_secs: impl Fn() -> u32 + 'static) {
        let alive = Arc::new(AtomicBool::new(true));
        on_cleanup({
            let alive = alive.clone();
            move || alive.store(false, Ordering::Relaxed)
        });

        let this = *self;
        spawn_local(async move {
            loop {
                let secs = interval_secs().max(1);
                gloo_timers::future::TimeoutFuture::new(secs.saturating_mul(1_000)).await;
                if !alive.load(Ordering::Relaxed) {
                    log::debug!("dashboard polling stopped");
                    break;
                }
                this.reload();
            }
        });
    }
}

impl Default for RecentLogs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_query_is_first_page_of_hundred() {
        let query = recent_query();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 100);
        assert!(!query.has_filters());
    }
}
