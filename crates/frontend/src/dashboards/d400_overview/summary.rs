use contracts::domain::a001_log_record::{LogLevel, LogRecord};

/// Итог по одному уровню
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: LogLevel,
    /// Количество записей
    pub records: usize,
    /// Сумма поля `count`
    pub count_sum: i64,
}

/// Одна строка на каждый уровень, в порядке `LogLevel::all()`, включая пустые
pub fn summarize_by_level(items: &[LogRecord]) -> Vec<LevelSummary> {
    let mut rows: Vec<LevelSummary> = LogLevel::all()
        .into_iter()
        .map(|level| LevelSummary {
            level,
            records: 0,
            count_sum: 0,
        })
        .collect();

    for item in items {
        let level = LogLevel::classify(&item.log_type);
        if let Some(row) = rows.iter_mut().find(|r| r.level == level) {
            row.records += 1;
            row.count_sum = row.count_sum.saturating_add(item.count);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(log_type: &str, count: i64) -> LogRecord {
        LogRecord {
            id: format!("{}-{}", log_type, count),
            server_id: "srv-1".into(),
            log_type: log_type.into(),
            count,
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_records_and_sums_per_level() {
        let items = vec![
            record("ERROR", 3),
            record("error", 2),
            record("warning", 7),
            record("audit", 1),
        ];
        let rows = summarize_by_level(&items);

        let error = rows.iter().find(|r| r.level == LogLevel::Error).unwrap();
        assert_eq!(error.records, 2);
        assert_eq!(error.count_sum, 5);

        let warn = rows.iter().find(|r| r.level == LogLevel::Warn).unwrap();
        assert_eq!(warn.records, 1);
        assert_eq!(warn.count_sum, 7);

        let other = rows.iter().find(|r| r.level == LogLevel::Other).unwrap();
        assert_eq!(other.records, 1);
    }

    #[test]
    fn test_empty_input_keeps_every_level() {
        let rows = summarize_by_level(&[]);
        assert_eq!(rows.len(), LogLevel::all().len());
        assert!(rows.iter().all(|r| r.records == 0 && r.count_sum == 0));
    }

    #[test]
    fn test_count_sum_saturates() {
        let rows = summarize_by_level(&[record("error", i64::MAX), record("error", 5)]);
        assert_eq!(rows[0].level, LogLevel::Error);
        assert_eq!(rows[0].count_sum, i64::MAX);
        assert_eq!(rows[0].records, 2);
    }
}
