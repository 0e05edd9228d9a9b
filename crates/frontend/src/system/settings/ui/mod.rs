pub mod state;

use self::state::SettingsForm;
use crate::shared::form::{error_for, FieldError};
use crate::shared::icons::icon;
use crate::shared::notification::{use_notifications, Notice};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::settings::store::use_settings;
use contracts::shared::display_settings::{
    DefaultView, DisplaySettings, LOG_RETENTION_DAYS_RANGE, REFRESH_INTERVAL_RANGE,
};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_settings();
    let notifications = use_notifications();

    let initial = SettingsForm::from(store.snapshot_untracked());
    let refresh_interval = RwSignal::new(initial.refresh_interval);
    let default_view = RwSignal::new(initial.default_view);
    let log_retention_days = RwSignal::new(initial.log_retention_days);
    let dark_mode = RwSignal::new(initial.dark_mode);
    let errors = RwSignal::new(Vec::<FieldError>::new());

    // The header toggle writes to the store; mirror it into the form
    Effect::new(move |_| {
        let current = store.snapshot().dark_mode;
        dark_mode.set(current);
    });

    let fill_form = move |settings: DisplaySettings| {
        let form = SettingsForm::from(settings);
        refresh_interval.set(form.refresh_interval);
        default_view.set(form.default_view);
        log_retention_days.set(form.log_retention_days);
        dark_mode.set(form.dark_mode);
        errors.set(Vec::new());
    };

    let save = move |_: leptos::ev::MouseEvent| {
        let form = SettingsForm {
            refresh_interval: refresh_interval.get_untracked(),
            default_view: default_view.get_untracked(),
            log_retention_days: log_retention_days.get_untracked(),
            dark_mode: dark_mode.get_untracked(),
        };
        match form.validate(store.snapshot_untracked()) {
            Ok(plan) => {
                errors.set(Vec::new());
                let saved = store.update(plan.patch);
                if plan.theme_changed {
                    log::debug!("dark mode changed to {}", saved.dark_mode);
                }
                notifications.notify(Notice::success("Settings saved successfully"));
            }
            Err(field_errors) => {
                log::debug!("settings form rejected: {:?}", field_errors);
                errors.set(field_errors);
            }
        }
    };

    let reset = move |_: leptos::ev::MouseEvent| {
        let defaults = store.reset();
        fill_form(defaults);
        notifications.notify(Notice::info("Settings reset to default values"));
    };

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| error_for(e, field)).map(|msg| {
                view! { <div class="form__error">{msg}</div> }
            })
        }
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Settings"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="card">
                    <h3 class="form__section-title">"General Settings"</h3>

                    <div class="form__group">
                        <label class="form__label" for="refresh-interval">
                            "Data Refresh Interval (seconds)"
                        </label>
                        <input
                            id="refresh-interval"
                            class="form__input"
                            type="number"
                            min=REFRESH_INTERVAL_RANGE.start().to_string()
                            max=REFRESH_INTERVAL_RANGE.end().to_string()
                            prop:value=move || refresh_interval.get()
                            on:input=move |ev| refresh_interval.set(event_target_value(&ev))
                        />
                        {field_error("refreshInterval")}
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Default View"</label>
                        <Select value=default_view>
                            {DefaultView::all().into_iter().map(|view| {
                                view! { <option value=view.as_str()>{view.label()}</option> }
                            }).collect_view()}
                        </Select>
                        {field_error("defaultView")}
                    </div>

                    <h3 class="form__section-title">"Log Management"</h3>

                    <div class="form__group">
                        <label class="form__label" for="log-retention">
                            "Log Retention Period (days)"
                        </label>
                        <input
                            id="log-retention"
                            class="form__input"
                            type="number"
                            min=LOG_RETENTION_DAYS_RANGE.start().to_string()
                            max=LOG_RETENTION_DAYS_RANGE.end().to_string()
                            prop:value=move || log_retention_days.get()
                            on:input=move |ev| log_retention_days.set(event_target_value(&ev))
                        />
                        {field_error("logRetentionDays")}
                    </div>

                    <h3 class="form__section-title">"Interface Settings"</h3>

                    <div class="form__group">
                        <Switch checked=dark_mode label="Dark Mode"/>
                    </div>

                    <div class="form__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=save>
                            {icon("save")}
                            " Save Settings"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=reset>
                            {icon("refresh")}
                            " Reset to Defaults"
                        </Button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
