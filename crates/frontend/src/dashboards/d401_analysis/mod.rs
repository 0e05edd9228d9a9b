//! D401 Analysis: разбивка последних записей по серверам

pub mod breakdown;

use self::breakdown::{group_by_server, ServerBreakdown};
use super::recent::{RecentLogs, RECENT_LIMIT};
use crate::shared::components::stat_card::format_thousands;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AnalysisDashboard() -> impl IntoView {
    let recent = RecentLogs::new();
    recent.reload();

    let rows = Memo::new(move |_| recent.items.with(|items| group_by_server(items)));

    view! {
        <PageFrame page_id="d401_analysis--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Analysis"</h1>
                    <span class="page__subtitle">
                        {format!("Per server, latest {} records", RECENT_LIMIT)}
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

                <Show when=move || recent.loading.get()>
                    <div class="table-loading">
                        <Spinner />
                    </div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Server ID"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Records"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Count Σ"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Errors"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|row| (row.server_id.clone(), row.records, row.count_sum, row.errors)
                                children=move |row: ServerBreakdown| {
                                    let error_class = if row.errors > 0 { "badge badge--error" } else { "badge" };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row.server_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.records}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_thousands(row.count_sum)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=error_class>{row.errors}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || !recent.loading.get() && rows.with(|r| r.is_empty())>
                    <div class="table-empty">"No records"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
