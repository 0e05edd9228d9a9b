use contracts::domain::a001_log_record::{LogLevel, LogRecord};
use std::collections::BTreeMap;

/// Разбивка последних записей по серверу
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerBreakdown {
    pub server_id: String,
    pub records: usize,
    pub count_sum: i64,
    /// Записи, классифицированные как ошибка
    pub errors: usize,
}

/// Группировка по `server_id`; сортировка по сумме `count` по убыванию,
/// при равенстве по `server_id`.
pub fn group_by_server(items: &[LogRecord]) -> Vec<ServerBreakdown> {
    let mut groups: BTreeMap<&str, ServerBreakdown> = BTreeMap::new();

    for item in items {
        let row = groups
            .entry(item.server_id.as_str())
            .or_insert_with(|| ServerBreakdown {
                server_id: item.server_id.clone(),
                records: 0,
                count_sum: 0,
                errors: 0,
            });
        row.records += 1;
        row.count_sum = row.count_sum.saturating_add(item.count);
        if LogLevel::classify(&item.log_type) == LogLevel::Error {
            row.errors += 1;
        }
    }

    let mut rows: Vec<ServerBreakdown> = groups.into_values().collect();
    rows.sort_by(|a, b| {
        b.count_sum
            .cmp(&a.count_sum)
            .then_with(|| a.server_id.cmp(&b.server_id))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(server_id: &str, log_type: &str, count: i64) -> LogRecord {
        LogRecord {
            id: format!("{}-{}-{}", server_id, log_type, count),
            server_id: server_id.into(),
            log_type: log_type.into(),
            count,
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_and_sorts_by_count_sum() {
        let items = vec![
            record("web-1", "info", 2),
            record("db-1", "error", 10),
            record("web-1", "ERROR", 3),
            record("cache", "debug", 1),
        ];
        let rows = group_by_server(&items);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].server_id, "db-1");
        assert_eq!(rows[0].errors, 1);
        assert_eq!(rows[1].server_id, "web-1");
        assert_eq!(rows[1].records, 2);
        assert_eq!(rows[1].count_sum, 5);
        assert_eq!(rows[1].errors, 1);
        assert_eq!(rows[2].server_id, "cache");
        assert_eq!(rows[2].errors, 0);
    }

    #[test]
    fn test_ties_ordered_by_server_id() {
        let items = vec![record("b", "info", 4), record("a", "info", 4)];
        let rows = group_by_server(&items);
        assert_eq!(rows[0].server_id, "a");
        assert_eq!(rows[1].server_id, "b");
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_server(&[]).is_empty());
    }

    #[test]
    fn test_count_sum_saturates() {
        let items = vec![
            record("db-1", "info", i64::MAX),
            record("db-1", "info", 1),
            record("db-1", "info", i64::MIN),
        ];
        let rows = group_by_server(&items);
        assert_eq!(rows[0].records, 3);
        assert_eq!(rows[0].count_sum, -1);
    }
}
