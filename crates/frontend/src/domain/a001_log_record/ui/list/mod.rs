pub mod state;

use self::state::{apply_page, create_state, current_query, delete_outcome, LogsFilterForm};
use super::details::{EditorTarget, LogDetails};
use crate::domain::a001_log_record::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_seq::RequestSequence;
use contracts::domain::a001_log_record::{LogLevel, LogQuery, LogRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Badge class by classified log type
fn type_badge_class(log_type: &str) -> &'static str {
    match LogLevel::classify(log_type) {
        LogLevel::Error => "badge badge--error",
        LogLevel::Warn => "badge badge--warning",
        LogLevel::Info => "badge badge--info",
        LogLevel::Debug | LogLevel::Other => "badge badge--success",
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn LogList() -> impl IntoView {
    let notifications = use_notifications();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let form_error = RwSignal::new(None::<String>);
    let sequence = StoredValue::new(RequestSequence::new());
    let editor = RwSignal::new(None::<EditorTarget>);

    // Filter form
    let server_id = RwSignal::new(String::new());
    let log_type = RwSignal::new(String::new());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());

    let load_items = move || {
        let Some(query) = current_query(state) else {
            return;
        };
        let Some(ticket) = sequence.try_with_value(|seq| seq.next()) else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::list_logs(&query).await;

            let is_latest = sequence
                .try_with_value(|seq| seq.is_latest(ticket))
                .unwrap_or(false);
            if !is_latest {
                log::debug!("dropping stale response for page {}", query.page);
                return;
            }

            match result {
                Ok(page) => {
                    apply_page(state, page);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("Failed to load logs: {}", e)));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let current_form = move || LogsFilterForm {
        server_id: server_id.get_untracked(),
        log_type: log_type.get_untracked(),
        date_from: date_from.get_untracked(),
        date_to: date_to.get_untracked(),
    };

    let active_filters_count = Signal::derive(move || {
        LogsFilterForm {
            server_id: server_id.get(),
            log_type: log_type.get(),
            date_from: date_from.get(),
            date_to: date_to.get(),
        }
        .active_count()
    });

    let search = move || {
        let page_size = state.with_untracked(|s| s.query.page_size);
        match current_form().to_query(page_size) {
            Ok(query) => {
                form_error.set(None);
                state.update(|s| s.query = query);
                load_items();
            }
            Err(msg) => form_error.set(Some(msg)),
        }
    };

    let reset = move || {
        server_id.set(String::new());
        log_type.set(String::new());
        date_from.set(String::new());
        date_to.set(String::new());
        form_error.set(None);
        state.update(|s| s.query = LogQuery::default());
        load_items();
    };

    let go_to_page = move |page: u32| {
        state.update(|s| s.query = s.query.with_page(page));
        load_items();
    };

    let change_page_size = move |size: u32| {
        state.update(|s| s.query = s.query.with_page_size(size));
        load_items();
    };

    let delete_log = move |id: String| {
        if !confirm("Are you sure you want to delete this log?") {
            return;
        }
        spawn_local(async move {
            let result = api::delete_log(&id).await;
            let outcome = delete_outcome(&result);
            notifications.notify(outcome.notice);
            if outcome.refetch {
                load_items();
            }
        });
    };

    let on_saved = Callback::new(move |_: ()| {
        let _ = editor.try_set(None);
        load_items();
    });
    let on_close = Callback::new(move |_: ()| editor.set(None));

    view! {
        <PageFrame page_id="a001_log_record--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Logs"</h1>
                    <span class="badge badge--primary">
                        {move || state.get().total.to_string()}
                    </span>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editor.set(Some(EditorTarget::New))
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("search")}
                            <span class="filter-panel__title">"Filters"</span>
                            {move || {
                                let count = active_filters_count.get();
                                (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                            }}
                        </div>

                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.query.page))
                                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                                total_count=Signal::derive(move || state.with(|s| s.total))
                                page_size=Signal::derive(move || state.with(|s| s.query.page_size))
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>

                        <div class="filter-panel-header__right">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| load_items()
                                disabled=Signal::derive(move || loading.get())
                            >
                                {move || if loading.get() { "Loading..." } else { "Refresh" }}
                            </Button>
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Server ID"</Label>
                                <Input value=server_id placeholder="Server ID" />
                            </Flex>

                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Log Type"</Label>
                                <Select value=log_type>
                                    <option value="">"All types"</option>
                                    {LogLevel::all().into_iter().filter_map(|level| {
                                        level.filter_value().map(|value| {
                                            view! { <option value=value>{level.label()}</option> }
                                        })
                                    }).collect_view()}
                                </Select>
                            </Flex>

                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"From"</Label>
                                <input
                                    type="date"
                                    class="form__input"
                                    prop:value=move || date_from.get()
                                    on:input=move |ev| date_from.set(event_target_value(&ev))
                                />
                            </Flex>

                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"To"</Label>
                                <input
                                    type="date"
                                    class="form__input"
                                    prop:value=move || date_to.get()
                                    on:input=move |ev| date_to.set(event_target_value(&ev))
                                />
                            </Flex>

                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| search()
                                disabled=Signal::derive(move || loading.get())
                            >
                                "Search"
                            </Button>

                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset()>
                                {icon("refresh")}
                                " Reset"
                            </Button>
                        </Flex>

                        {move || form_error.get().map(|msg| view! {
                            <div class="form__error">{msg}</div>
                        })}
                    </div>
                </div>

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <Show when=move || loading.get()>
                    <div class="table-loading">
                        <Spinner />
                    </div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=100.0>"ID"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Server ID"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Type"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Count"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Value"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Timestamp"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|item| (item.id.clone(), item.server_id.clone(), item.log_type.clone(), item.count, item.value.clone())
                                children=move |item: LogRecord| {
                                    let id_for_edit = item.id.clone();
                                    let id_for_delete = item.id.clone();
                                    let badge_class = type_badge_class(&item.log_type);

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            editor.set(Some(EditorTarget::Existing(id_for_edit.clone())));
                                                        }
                                                    >
                                                        {item.id.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.server_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=badge_class>{item.log_type.to_uppercase()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">{item.count}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{item.value.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_timestamp(item.timestamp.as_deref())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Delete"
                                                    on:click=move |_| delete_log(id_for_delete.clone())
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || !loading.get() && state.with(|s| s.is_loaded && s.items.is_empty())>
                        <div class="table-empty">"No logs found"</div>
                    </Show>
                </div>
            </div>

            {move || editor.get().map(|target| view! {
                <LogDetails target=target on_close=on_close on_saved=on_saved />
            })}
        </PageFrame>
    }
}
