use crate::shared::icons::icon;
use contracts::domain::a001_log_record::LogLevel;
use leptos::prelude::*;

/// Integer with a non-breaking space as thousands separator
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// CSS modifier for a log level card
pub fn level_class(level: Option<LogLevel>) -> &'static str {
    match level {
        Some(LogLevel::Error) => "stat-card stat-card--error",
        Some(LogLevel::Warn) => "stat-card stat-card--warning",
        Some(LogLevel::Info) => "stat-card stat-card--info",
        Some(LogLevel::Debug) => "stat-card stat-card--success",
        Some(LogLevel::Other) | None => "stat-card",
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<i64>>,
    /// Level the card represents, None for neutral cards
    #[prop(optional)]
    level: Option<LogLevel>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "-".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=level_class(level)>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_thousands(-1234), "-1\u{00a0}234");
    }
}
