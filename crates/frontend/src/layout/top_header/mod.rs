//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title and the dark mode toggle.
//! The toggle writes through the settings store; the theme follows from it.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::settings::use_settings;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let settings = use_settings();

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_dark = move || settings.snapshot().dark_mode;

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Log Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| {
                        settings.toggle_dark_mode();
                    }
                    title=move || if is_dark() { "Light theme" } else { "Dark theme" }
                >
                    {move || if is_dark() { icon("sun") } else { icon("moon") }}
                </button>
            </div>
        </div>
    }
}
