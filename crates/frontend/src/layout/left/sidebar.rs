//! Навигация по страницам приложения

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::display_settings::DefaultView;
use leptos::prelude::*;

pub fn page_icon(page: DefaultView) -> &'static str {
    match page {
        DefaultView::Dashboard => "layout-dashboard",
        DefaultView::Logs => "list",
        DefaultView::Analysis => "bar-chart",
        DefaultView::Settings => "settings",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="app-sidebar__content">
            {DefaultView::all().into_iter().map(|page| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == page
                        on:click=move |_| ctx.activate(page)
                    >
                        {icon(page_icon(page))}
                        <span class="app-sidebar__label">{page.label()}</span>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
