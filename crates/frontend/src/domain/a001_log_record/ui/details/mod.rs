pub mod state;

pub use self::state::EditorTarget;

use self::state::{notify_parent, LogEditorForm};
use crate::domain::a001_log_record::api;
use crate::shared::date_utils::format_timestamp;
use crate::shared::form::{error_for, FieldError};
use crate::shared::modal::Modal;
use crate::shared::notification::{use_notifications, Notice};
use contracts::domain::a001_log_record::LogRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Модальное окно создания/редактирования записи лога
#[component]
pub fn LogDetails(
    target: EditorTarget,
    on_close: Callback<()>,
    /// Called after a successful create/update
    on_saved: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();

    let server_id = RwSignal::new(String::new());
    let log_type = RwSignal::new(String::new());
    let count = RwSignal::new(String::new());
    let value = RwSignal::new(String::new());
    let loaded = RwSignal::new(None::<LogRecord>);
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let fill = move |record: &LogRecord| {
        let form = LogEditorForm::from(record);
        let _ = server_id.try_set(form.server_id);
        let _ = log_type.try_set(form.log_type);
        let _ = count.try_set(form.count);
        let _ = value.try_set(form.value);
    };

    if let EditorTarget::Existing(id) = target.clone() {
        set_loading.set(true);
        spawn_local(async move {
            match api::get_log(&id).await {
                Ok(record) => {
                    fill(&record);
                    let _ = loaded.try_set(Some(record));
                }
                Err(e) => {
                    notifications.notify(Notice::error(format!("Failed to load log: {}", e)));
                    notify_parent(on_close);
                }
            }
            let _ = set_loading.try_set(false);
        });
    }

    let target_for_save = StoredValue::new(target.clone());
    let save = move |_: leptos::ev::MouseEvent| {
        let form = LogEditorForm {
            server_id: server_id.get_untracked(),
            log_type: log_type.get_untracked(),
            count: count.get_untracked(),
            value: value.get_untracked(),
        };
        let input = match form.to_input() {
            Ok(input) => input,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(Vec::new());
        set_saving.set(true);

        let target = target_for_save.get_value();
        spawn_local(async move {
            let result = match &target {
                EditorTarget::New => api::create_log(&input).await,
                EditorTarget::Existing(id) => api::update_log(id, &input).await,
            };
            match result {
                Ok(_) => {
                    let text = match target {
                        EditorTarget::New => "Log created successfully",
                        EditorTarget::Existing(_) => "Log updated successfully",
                    };
                    notifications.notify(Notice::success(text));
                    notify_parent(on_saved);
                }
                Err(e) => {
                    notifications.notify(Notice::error(format!("Failed to save log: {}", e)));
                    let _ = set_saving.try_set(false);
                }
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| error_for(e, field)).map(|msg| {
                view! { <div class="form__error">{msg}</div> }
            })
        }
    };

    let title = target.title();

    view! {
        <Modal
            title=title
            on_close=on_close
            action_buttons=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(move || saving.get() || loading.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            }
        >
            <Show
                when=move || !loading.get()
                fallback=|| view! { <Spinner /> }
            >
                <div class="form__group">
                    <Label>"Server ID"</Label>
                    <Input value=server_id />
                    {field_error("serverId")}
                </div>
                <div class="form__group">
                    <Label>"Type"</Label>
                    <Input value=log_type placeholder="error / warn / info / debug" />
                    {field_error("type")}
                </div>
                <div class="form__group">
                    <Label>"Count"</Label>
                    <input
                        type="number"
                        min="0"
                        class="form__input"
                        prop:value=move || count.get()
                        on:input=move |ev| count.set(event_target_value(&ev))
                    />
                    {field_error("count")}
                </div>
                <div class="form__group">
                    <Label>"Value"</Label>
                    <Textarea value=value />
                </div>
                {move || loaded.get().map(|record| view! {
                    <div class="form__hint">
                        "Timestamp: " {format_timestamp(record.timestamp.as_deref())}
                    </div>
                })}
            </Show>
        </Modal>
    }
}
