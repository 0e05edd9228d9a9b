//! Защита от ответов, пришедших не по порядку
//!
//! Каждый запрос списка получает номер; ответ применяется, только если
//! его номер всё ещё последний выданный. Медленный старый ответ не
//! перезапишет результат более позднего запроса.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Номер выданного запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выдать номер для нового запроса. Все ранее выданные устаревают.
    pub fn next(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_ticket_is_current() {
        let seq = RequestSequence::new();
        let first = seq.next();
        assert!(seq.is_latest(first));
        let second = seq.next();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
        assert!(second > first);
    }

    #[test]
    fn test_clones_share_counter() {
        let seq = RequestSequence::new();
        let view_copy = seq.clone();
        let ticket = seq.next();
        let _ = view_copy.next();
        assert!(!seq.is_latest(ticket));
    }
}
