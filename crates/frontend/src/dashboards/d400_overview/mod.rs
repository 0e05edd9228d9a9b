//! D400 Overview: сводка по уровням для последних записей
//!
//! Данные обновляются каждые `refresh_interval` секунд из настроек.

pub mod summary;

use self::summary::summarize_by_level;
use super::recent::{RecentLogs, RECENT_LIMIT};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::settings::use_settings;
use contracts::domain::a001_log_record::LogLevel;
use leptos::prelude::*;
use thaw::*;

fn level_icon(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "x",
        LogLevel::Warn => "bar-chart",
        LogLevel::Info | LogLevel::Debug | LogLevel::Other => "list",
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let settings = use_settings();
    let recent = RecentLogs::new();

    recent.reload();
    recent.poll_every(move || settings.snapshot_untracked().refresh_interval);

    let summary = Memo::new(move |_| recent.items.with(|items| summarize_by_level(items)));

    let cards = move || {
        summary
            .get()
            .into_iter()
            .map(|row| {
                let records = row.records as i64;
                view! {
                    <StatCard
                        label=row.level.label().to_string()
                        icon_name=level_icon(row.level)
                        value=Signal::derive(move || Some(records))
                        level=row.level
                        subtitle=Signal::derive(move || Some(format!("Σ count: {}", row.count_sum)))
                    />
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <span class="page__subtitle">
                        {move || format!(
                            "Latest {} records, refresh every {} s",
                            RECENT_LIMIT,
                            settings.snapshot().refresh_interval,
                        )}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| recent.reload()
                        disabled=Signal::derive(move || recent.loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || recent.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="stat-grid">
                    <StatCard
                        label="Total".to_string()
                        icon_name="layout-dashboard"
                        value=Signal::derive(move || Some(recent.total.get() as i64))
                    />
                    {cards}
                </div>

                <Show when=move || recent.loading.get()>
                    <div class="table-loading">
                        <Spinner />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
